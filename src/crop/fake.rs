//! Recording cropper for tests.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{CropError, EnvironmentError};
use crate::slot::Rect;

use super::Cropper;

/// Writes a placeholder file per crop and remembers every call.
#[derive(Default)]
pub struct FakeCropper {
    pub missing: bool,
    /// File stems that fail with a non-zero exit.
    pub fail: HashSet<String>,
    /// File stems that "succeed" without writing anything.
    pub silent: HashSet<String>,
    pub calls: Mutex<Vec<(Rect, PathBuf)>>,
}

impl FakeCropper {
    pub fn failing(names: &[&str]) -> Self {
        Self {
            fail: names.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<(Rect, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Cropper for FakeCropper {
    fn name(&self) -> &str {
        "fake"
    }

    fn probe(&self) -> Result<String, EnvironmentError> {
        if self.missing {
            return Err(EnvironmentError::ToolMissing {
                tool: "fake".to_string(),
                reason: "not installed".to_string(),
            });
        }
        Ok("fake 1.0".to_string())
    }

    fn crop(&self, _input: &Path, rect: Rect, output: &Path) -> Result<(), CropError> {
        self.calls.lock().unwrap().push((rect, output.to_path_buf()));

        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        if self.fail.contains(&stem) {
            return Err(CropError::Exit {
                program: "fake".to_string(),
                code: 1,
                output: format!("simulated failure for {}", stem),
            });
        }
        if self.silent.contains(&stem) {
            return Ok(());
        }

        fs::write(output, rect.geometry()).map_err(|e| CropError::Image(e.to_string()))
    }
}
