//! In-process backend built on the `image` crate.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use image::RgbaImage;

use crate::error::{CropError, EnvironmentError};
use crate::slot::Rect;

use super::Cropper;

/// Crops by decoding the sheet once and copying sub-images out of it.
///
/// The copy is a fresh buffer, so the output never carries a page offset.
#[derive(Default)]
pub struct NativeCropper {
    sheet: Mutex<Option<(PathBuf, RgbaImage)>>,
}

impl NativeCropper {
    pub fn new() -> Self {
        Self::default()
    }

    fn extract(&self, input: &Path, rect: Rect) -> Result<RgbaImage, CropError> {
        let mut cached = self
            .sheet
            .lock()
            .map_err(|_| CropError::Image("decoded sheet cache poisoned".to_string()))?;

        if cached.as_ref().map(|(p, _)| p.as_path()) != Some(input) {
            let img = image::open(input)
                .map_err(|e| CropError::Image(format!("Failed to load {}: {}", input.display(), e)))?
                .to_rgba8();
            *cached = Some((input.to_path_buf(), img));
        }

        let (_, sheet) = cached
            .as_ref()
            .ok_or_else(|| CropError::Image("sheet not loaded".to_string()))?;

        let fits = rect.x as u64 + rect.w as u64 <= sheet.width() as u64
            && rect.y as u64 + rect.h as u64 <= sheet.height() as u64;
        if !fits {
            return Err(CropError::Image(format!(
                "slot {} lies outside the {}x{} sheet",
                rect,
                sheet.width(),
                sheet.height()
            )));
        }

        Ok(image::imageops::crop_imm(sheet, rect.x, rect.y, rect.w, rect.h).to_image())
    }
}

impl Cropper for NativeCropper {
    fn name(&self) -> &str {
        "native"
    }

    fn probe(&self) -> Result<String, EnvironmentError> {
        Ok("image crate (in-process)".to_string())
    }

    fn crop(&self, input: &Path, rect: Rect, output: &Path) -> Result<(), CropError> {
        let tile = self.extract(input, rect)?;
        tile.save(output)
            .map_err(|e| CropError::Image(format!("Failed to write PNG: {}", e)))
    }
}
