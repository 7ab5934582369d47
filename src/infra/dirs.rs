//! Platform-specific directory management
//!
//! Provides platform-specific paths for config, data, and build log directories.
//! Follows XDG Base Directory Specification on Linux and standard locations on macOS.
//!
//! Environment variables can override default directories:
//! - `SHARPBUILD_CONFIG_DIR` - Override config directory
//! - `SHARPBUILD_DATA_DIR` - Override data directory
//! - `SHARPBUILD_LOGS_DIR` - Override build logs root

use std::env;
use std::path::PathBuf;

use crate::config::defaults::CONFIG_FILE_NAME;

/// Environment variable names for directory overrides
pub const ENV_CONFIG_DIR: &str = "SHARPBUILD_CONFIG_DIR";
pub const ENV_DATA_DIR: &str = "SHARPBUILD_DATA_DIR";
pub const ENV_LOGS_DIR: &str = "SHARPBUILD_LOGS_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "sharpbuild";

/// Subdirectory of the data directory holding per-request build logs
const BUILD_LOGS_SUBDIR: &str = "build_logs";

/// Platform-specific directory provider for sharpbuild
#[derive(Debug, Clone)]
pub struct SharpbuildDirs {
    config_dir: PathBuf,
    data_dir: PathBuf,
    logs_dir: Option<PathBuf>,
}

impl SharpbuildDirs {
    /// Create a new `SharpbuildDirs` instance
    ///
    /// Checks environment variables first, then falls back to platform defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve(ENV_CONFIG_DIR).unwrap_or_else(Self::platform_config_dir),
            data_dir: Self::resolve(ENV_DATA_DIR).unwrap_or_else(Self::platform_data_dir),
            logs_dir: Self::resolve(ENV_LOGS_DIR),
        }
    }

    /// Get the config directory path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/sharpbuild` or `~/.config/sharpbuild`
    /// - macOS: `~/Library/Application Support/sharpbuild`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Get the data directory path
    ///
    /// - Linux: `$XDG_DATA_HOME/sharpbuild` or `~/.local/share/sharpbuild`
    /// - macOS: `~/Library/Application Support/sharpbuild`
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }

    /// Get the build logs root
    ///
    /// `SHARPBUILD_LOGS_DIR` if set, otherwise `build_logs` under the data directory.
    #[must_use]
    pub fn build_logs_dir(&self) -> PathBuf {
        self.logs_dir
            .clone()
            .unwrap_or_else(|| self.data_dir.join(BUILD_LOGS_SUBDIR))
    }

    /// Whether the build logs root comes from `SHARPBUILD_LOGS_DIR`
    #[must_use]
    pub fn logs_dir_overridden(&self) -> bool {
        self.logs_dir.is_some()
    }

    /// Get the global config file path
    #[must_use]
    pub fn global_config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Read a directory override from the environment
    fn resolve(var: &str) -> Option<PathBuf> {
        env::var_os(var)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// Get platform-specific config directory
    fn platform_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }

    /// Get platform-specific data directory
    fn platform_data_dir() -> PathBuf {
        dirs::data_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".local").join("share").join(APP_NAME))
                    .unwrap_or_else(|| {
                        PathBuf::from(".")
                            .join(".local")
                            .join("share")
                            .join(APP_NAME)
                    })
            })
    }
}

impl Default for SharpbuildDirs {
    fn default() -> Self {
        Self::new()
    }
}
