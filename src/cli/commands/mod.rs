//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod args;
pub mod clean;
pub mod config;
pub mod key;
pub mod logs;

use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::{Args, Subcommand};

use crate::cli::output::OutputConfig;
use crate::core::build_info::BuildInfo;
use crate::core::global_config::GlobalConfig;
use crate::core::logs::BuildLogPaths;
use crate::infra::dirs::SharpbuildDirs;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the dedup key and solution digest of a build request
    Key {
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Show where a build request writes its logs
    Logs {
        #[command(flatten)]
        request: RequestArgs,

        /// Create the log directory
        #[arg(long)]
        create: bool,
    },

    /// Show the toolchain arguments for a build request
    Args {
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Remove the log directory of a build request
    Clean {
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Show the effective global configuration
    Config {
        /// Print the config file path only
        #[arg(long)]
        path: bool,

        /// Write a config file with the current settings if none exists
        #[arg(long, conflicts_with = "path")]
        init: bool,
    },
}

/// Build request flags shared by subcommands
#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
    /// Path to the solution file
    pub solution: String,

    /// Build configuration (defaults to config.toml, then "Debug")
    #[arg(short, long)]
    pub configuration: Option<String>,

    /// Target to build (repeatable)
    #[arg(short = 't', long = "target", value_name = "TARGET")]
    pub targets: Vec<String>,

    /// Restore packages before building
    #[arg(long)]
    pub restore: bool,

    /// Skip package restore even if config.toml enables it
    #[arg(long, conflicts_with = "restore")]
    pub no_restore: bool,

    /// Extra toolchain property, usually KEY=VALUE (repeatable)
    #[arg(short = 'p', long = "property", value_name = "PROPERTY")]
    pub properties: Vec<String>,
}

impl RequestArgs {
    /// Build the request, filling gaps from the global configuration
    ///
    /// Properties from the command line come first, configured ones after.
    pub fn to_build_info(&self, config: &GlobalConfig) -> Result<BuildInfo> {
        let configuration = self
            .configuration
            .as_deref()
            .unwrap_or_else(|| config.configuration());

        let info = BuildInfo::builder(&self.solution, configuration)
            .with_targets(self.targets.iter().cloned())
            .with_restore(self.effective_restore(config))
            .with_properties(self.properties.iter().cloned())
            .with_properties(config.build.properties.iter().cloned())
            .build()
            .context("Rejected build request")?;

        tracing::debug!("Build request: {info}");
        Ok(info)
    }

    /// `--no-restore` beats `--restore`, which beats config.toml
    fn effective_restore(&self, config: &GlobalConfig) -> bool {
        !self.no_restore && (self.restore || config.restore())
    }
}

/// Resolved environment shared by all commands
#[derive(Debug)]
pub struct CommandContext {
    /// Platform directories
    pub dirs: SharpbuildDirs,
    /// Loaded global configuration
    pub config: GlobalConfig,
    /// Effective logs root
    pub logs_root: PathBuf,
    /// Output preferences
    pub output: OutputConfig,
}

impl CommandContext {
    /// Load configuration and resolve the logs root
    ///
    /// `--logs-dir` beats `SHARPBUILD_LOGS_DIR`, which beats `config.toml`
    /// and the platform default.
    pub fn load(output: OutputConfig, logs_dir: Option<PathBuf>) -> Result<Self> {
        let dirs = SharpbuildDirs::new();
        let config = GlobalConfig::load(&dirs).context("Failed to load global configuration")?;
        let logs_root = logs_dir.unwrap_or_else(|| config.logs_dir(&dirs));
        tracing::debug!("Logs root: {}", logs_root.display());

        Ok(Self {
            dirs,
            config,
            logs_root,
            output,
        })
    }

    /// Log paths of a request, refused unless they sit directly under the logs root
    pub fn log_paths(&self, info: &BuildInfo) -> Result<BuildLogPaths> {
        let paths = info.log_paths(&self.logs_root);
        ensure!(
            paths.dir().parent() == Some(self.logs_root.as_path()),
            "Log directory '{}' is outside the logs root '{}'",
            paths.dir().display(),
            self.logs_root.display()
        );
        Ok(paths)
    }
}

impl Commands {
    /// Execute the command
    pub fn run(self, output: OutputConfig, logs_dir: Option<PathBuf>) -> Result<()> {
        let ctx = CommandContext::load(output, logs_dir)?;

        match self {
            Self::Key { request } => key::execute(&ctx, &request),
            Self::Logs { request, create } => logs::execute(&ctx, &request, create),
            Self::Args { request } => args::execute(&ctx, &request),
            Self::Clean { request } => clean::execute(&ctx, &request),
            Self::Config { path, init } => config::execute(&ctx, path, init),
        }
    }
}
