//! Default configuration values

/// Configuration used when neither the command line nor `config.toml` names one
pub const DEFAULT_CONFIGURATION: &str = "Debug";

/// Number of hex characters of the solution digest kept in a log directory name
pub const LOG_DIGEST_LEN: usize = 32;

/// Separator between the solution digest and the configuration name
pub const LOG_DIR_SEPARATOR: char = '_';

/// Full build log written by the toolchain logger
pub const MSBUILD_LOG_FILE: &str = "msbuild_log.txt";

/// Warnings and errors reported by the toolchain logger, one per line
pub const MSBUILD_ISSUES_FILE: &str = "msbuild_issues.csv";

/// Name of the global configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";
