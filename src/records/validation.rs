//! Record file validation.
//!
//! Checks that a path is something we can sensibly load before reading it, so that the user
//! gets a precise message instead of a JSON parse error for a directory or an empty file.

use crate::error::{Result, WardviewError};
use std::fs::File;
use std::path::Path;

/// Record exports larger than this are almost certainly the wrong file.
pub const MAX_RECORD_FILE_SIZE: u64 = 256 * 1024 * 1024; // 256MB

/// Validate that a record file path is accessible and suitable for loading
///
/// # Error Cases
/// - File does not exist
/// - Path points to a directory
/// - File is empty
/// - File is larger than [`MAX_RECORD_FILE_SIZE`]
/// - File is not readable due to permissions
pub fn validate_record_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(WardviewError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let metadata = std::fs::metadata(path)
        .map_err(|e| WardviewError::file_error("Failed to read file metadata", e))?;

    if !metadata.is_file() {
        return Err(WardviewError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let file_size = metadata.len();

    if file_size == 0 {
        return Err(WardviewError::file_error(
            format!("File is empty: {}", path.display()),
            std::io::Error::new(std::io::ErrorKind::InvalidData, "Empty file"),
        ));
    }

    if file_size > MAX_RECORD_FILE_SIZE {
        return Err(WardviewError::file_error(
            format!(
                "File is too large for a record export ({}MB): {}",
                file_size / (1024 * 1024),
                path.display()
            ),
            std::io::Error::new(std::io::ErrorKind::InvalidData, "File too large"),
        ));
    }

    File::open(path).map_err(|e| WardviewError::file_error("Cannot open file for reading", e))?;

    Ok(())
}
