//! Infrastructure layer
//!
//! Handles all I/O operations: platform directories and the filesystem.
//! This module is the only place where side effects occur.

pub mod dirs;
pub mod filesystem;
