//! Error types for sharpbuild
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Build request construction errors
///
/// Raised before any build is scheduled. An identity with an empty solution
/// or configuration would collide with every other degenerate request in a
/// dedup map, so it is never produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildInfoError {
    /// Solution path is empty
    #[error("Build request has an empty solution path")]
    EmptySolution,

    /// Configuration name is empty
    #[error("Build request for '{solution}' has an empty configuration name")]
    EmptyConfiguration { solution: String },

    /// Configuration name would not form a single log directory name
    #[error("Configuration '{configuration}' must not contain path separators")]
    InvalidConfiguration { configuration: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },
}
