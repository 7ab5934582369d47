//! Filesystem operations
//!
//! Creates and removes build log directories on behalf of the caller that
//! actually runs the build. Path derivation itself never touches the disk.

use std::path::Path;

use crate::error::FilesystemError;

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    tracing::info!("Created log directory {}", path.display());
    Ok(())
}

/// Remove a directory and all its contents
///
/// Returns `false` if the directory did not exist.
pub fn remove_dir_all(path: &Path) -> Result<bool, FilesystemError> {
    if !path.exists() {
        return Ok(false);
    }
    std::fs::remove_dir_all(path).map_err(|e| FilesystemError::RemoveDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    tracing::info!("Removed log directory {}", path.display());
    Ok(true)
}
