//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Isolated sharpbuild environment
///
/// Points the config, data, and logs directories into a temporary directory
/// so tests never see the user's real configuration.
pub struct TestEnv {
    /// Temporary directory holding everything the test writes
    pub dir: TempDir,
}

impl TestEnv {
    /// Create a new environment in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Root of the temporary directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Config directory used by the binary
    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// Data directory used by the binary
    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    /// Default logs root (no overrides)
    #[allow(dead_code)]
    pub fn default_logs_dir(&self) -> PathBuf {
        self.data_dir().join("build_logs")
    }

    /// Write `config.toml` into the config directory
    #[allow(dead_code)]
    pub fn write_config(&self, content: &str) {
        let dir = self.config_dir();
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        std::fs::write(dir.join("config.toml"), content).expect("Failed to write config");
    }

    /// Command for the sharpbuild binary bound to this environment
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_sharpbuild"));
        cmd.current_dir(self.dir.path())
            .env("SHARPBUILD_CONFIG_DIR", self.config_dir())
            .env("SHARPBUILD_DATA_DIR", self.data_dir())
            .env_remove("SHARPBUILD_LOGS_DIR")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run sharpbuild with arguments
    pub fn run(&self, args: &[&str]) -> Output {
        self.command()
            .args(args)
            .output()
            .expect("Failed to execute sharpbuild")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Stdout of a finished command as a trimmed string
#[allow(dead_code)]
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Stderr of a finished command
#[allow(dead_code)]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Sample config file for testing
#[allow(dead_code)]
pub const SAMPLE_CONFIG: &str = r#"
[build]
configuration = "Release"
restore = true
properties = ["GodotTargetPlatform=linux"]
"#;
