//! Core business logic module
//!
//! This module contains all business logic for sharpbuild.
//! Apart from reading and writing `config.toml` in [`global_config`], it has
//! NO I/O operations - those belong in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`build_info`] - Build request identity and dedup key
//! - [`logs`] - Log directory naming
//! - [`invocation`] - Toolchain argument rendering
//! - [`tracker`] - In-flight build deduplication
//! - [`global_config`] - Global configuration management

pub mod build_info;
pub mod global_config;
pub mod invocation;
pub mod logs;
pub mod tracker;
