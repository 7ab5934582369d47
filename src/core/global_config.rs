//! Global configuration management
//!
//! Reads settings from `config.toml` in the config directory: the default
//! configuration and restore behaviour for build requests, extra toolchain
//! properties appended to every request, and the root directory for build logs.

use crate::config::defaults::DEFAULT_CONFIGURATION;
use crate::infra::dirs::SharpbuildDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Global configuration error types
#[derive(Error, Debug)]
pub enum GlobalConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to write config file
    #[error("Failed to write config file '{path}': {error}")]
    WriteError { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },
}

/// Global configuration for sharpbuild
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Defaults for build requests
    #[serde(default)]
    pub build: BuildConfig,

    /// Log settings
    #[serde(default)]
    pub logs: LogsConfig,
}

/// Defaults applied to build requests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Configuration used when a request names none
    pub configuration: Option<String>,

    /// Restore packages before compiling
    pub restore: Option<bool>,

    /// Properties appended to every request, after the request's own
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<String>,
}

/// Log settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsConfig {
    /// Root directory for per-request log directories
    pub dir: Option<PathBuf>,
}

impl GlobalConfig {
    /// Load global configuration from the config directory
    ///
    /// Returns the default configuration if the file doesn't exist.
    pub fn load(dirs: &SharpbuildDirs) -> Result<Self, GlobalConfigError> {
        Self::load_from_path(&dirs.global_config_path())
    }

    /// Load global configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, GlobalConfigError> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| GlobalConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| GlobalConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Save global configuration to a specific path
    ///
    /// Creates parent directories if they don't exist.
    pub fn save_to_path(&self, path: &Path) -> Result<(), GlobalConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| GlobalConfigError::WriteError {
                path: parent.display().to_string(),
                error: e.to_string(),
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| GlobalConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        fs::write(path, content).map_err(|e| GlobalConfigError::WriteError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Get the effective default configuration name
    #[must_use]
    pub fn configuration(&self) -> &str {
        self.build
            .configuration
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CONFIGURATION)
    }

    /// Get the effective restore default
    #[must_use]
    pub fn restore(&self) -> bool {
        self.build.restore.unwrap_or(false)
    }

    /// Get the effective logs root
    ///
    /// `SHARPBUILD_LOGS_DIR` if set, then the configured directory, then the
    /// platform logs directory.
    #[must_use]
    pub fn logs_dir(&self, dirs: &SharpbuildDirs) -> PathBuf {
        if dirs.logs_dir_overridden() {
            return dirs.build_logs_dir();
        }
        self.logs.dir.clone().unwrap_or_else(|| dirs.build_logs_dir())
    }
}
