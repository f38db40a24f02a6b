//! Environment checks run before anything is written.

use std::fs::File;

use crate::config::Config;
use crate::crop::Cropper;
use crate::error::EnvironmentError;

/// What the environment check found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Backend description, e.g. the tool's version line.
    pub tool: String,
}

/// Confirm the crop backend is usable and the input image is readable.
///
/// Read-only: on failure nothing on disk has been touched.
pub fn validate(config: &Config, cropper: &dyn Cropper) -> Result<Environment, EnvironmentError> {
    let tool = cropper.probe()?;

    let readable = config.input.is_file() && File::open(&config.input).is_ok();
    if !readable {
        return Err(EnvironmentError::InputMissing {
            path: config.input.clone(),
        });
    }

    Ok(Environment { tool })
}
