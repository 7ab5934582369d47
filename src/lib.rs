//! Sharpbuild - build request identity and log namespaces
//!
//! This library decides how a request to build a solution is identified and
//! where that request's logs are written. Two requests for the same solution
//! and configuration are the same request, whatever their targets, restore
//! flag, or extra properties, and they share one log directory.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (no I/O operations)
//! - [`infra`] - Infrastructure layer (directories, filesystem)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
