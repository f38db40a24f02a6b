//! Whole-file replacement.

use std::fs;
use std::path::Path;

use crate::error::{Result, SplitError};

/// Replace `path` with `contents` via a sibling temporary file and a rename.
///
/// Readers see either the old file or the new one, never a partial write.
/// The parent directory must already exist.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| SplitError::Io {
            path: path.to_path_buf(),
            message: "Path has no file name".to_string(),
        })?;
    let tmp = path.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()));

    fs::write(&tmp, contents).map_err(|e| SplitError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })?;

    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        SplitError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to replace file: {}", e),
        }
    })
}
