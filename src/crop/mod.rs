//! Cropping backends.
//!
//! The pipeline only needs one capability from an image engine: copy a
//! rectangle of the sprite sheet into a standalone file whose origin is (0,0).
//! `MagickCropper` shells out to ImageMagick; `NativeCropper` does the same
//! work in-process with the `image` crate.

mod magick;
mod native;

#[cfg(test)]
pub(crate) mod fake;

use std::path::Path;

use clap::ValueEnum;

use crate::config::Config;
use crate::error::{CropError, EnvironmentError};
use crate::slot::Rect;

pub use magick::{MagickCropper, CROP_TIMEOUT_SECS, PROBE_TIMEOUT_SECS};
pub use native::NativeCropper;

/// A rectangle-to-file crop capability.
pub trait Cropper: Send + Sync {
    /// Short backend label for status output.
    fn name(&self) -> &str;

    /// Confirm the backend is usable, returning a human-readable description
    /// (for example the tool's version line).
    fn probe(&self) -> Result<String, EnvironmentError>;

    /// Crop `rect` out of `input` and write it to `output`.
    fn crop(&self, input: &Path, rect: Rect, output: &Path) -> Result<(), CropError>;
}

/// Selectable crop backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Backend {
    /// Shell out to ImageMagick
    #[default]
    Magick,
    /// Crop in-process
    Native,
}

impl Backend {
    /// Instantiate the backend for a config.
    pub fn cropper(self, config: &Config) -> Box<dyn Cropper> {
        match self {
            Backend::Magick => Box::new(
                MagickCropper::new(config.tool.as_str())
                    .with_crop_timeout(config.crop_timeout_secs),
            ),
            Backend::Native => Box::new(NativeCropper::new()),
        }
    }
}
