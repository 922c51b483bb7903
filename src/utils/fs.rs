use std::fs;
use std::path::Path;

use crate::utils::{ConvertError, ConvertResult};

/// Ensure the output directory exists, creating intermediate segments as
/// needed. Idempotent: an existing directory is a no-op success.
pub fn ensure_output_directory(path: impl AsRef<Path>) -> ConvertResult<()> {
    let path = path.as_ref();

    if path.exists() {
        if path.is_dir() {
            return Ok(());
        }
        return Err(ConvertError::directory(
            path,
            "path exists and is not a directory",
        ));
    }

    fs::create_dir_all(path).map_err(|e| ConvertError::directory(path, e))
}

/// Check if a file exists
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Get the file extension as a lowercase string, if there is one
pub fn get_extension(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Base name of a path for progress display, falling back to the full path
/// when there is no final component.
pub fn display_name(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
        .unwrap_or_else(|| path.display().to_string())
}
