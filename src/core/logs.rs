//! Build log namespaces
//!
//! Every build request writes its logs into a directory named after the
//! solution it builds and the configuration it builds with:
//!
//! ```text
//! <logs_root>/<digest(solution)>_<configuration>/msbuild_log.txt
//! <logs_root>/<digest(solution)>_<configuration>/msbuild_issues.csv
//! ```
//!
//! Only the solution path is hashed, so all configurations of one solution
//! share a directory prefix. Nothing in this module touches the filesystem.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::config::defaults::{
    LOG_DIGEST_LEN, LOG_DIR_SEPARATOR, MSBUILD_ISSUES_FILE, MSBUILD_LOG_FILE,
};

/// Compute the digest of a solution path used in log directory names
///
/// SHA-256 over the UTF-8 bytes of `solution`, rendered as lowercase hex and
/// truncated to [`LOG_DIGEST_LEN`] characters. The result is the same on every
/// platform and never contains a path separator.
#[must_use]
pub fn solution_digest(solution: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(solution.as_bytes());
    let full = hex::encode(hasher.finalize());
    full[..LOG_DIGEST_LEN].to_string()
}

/// Whether `configuration` can be appended to a digest without leaving the
/// log directory name
///
/// The digest prefix keeps `.` and `..` from being special, so only
/// separators and NUL are refused.
#[must_use]
pub fn is_dir_name_safe(configuration: &str) -> bool {
    !configuration.contains(['/', '\\', '\0'])
}

/// Name of the log directory for a (solution, configuration) pair
#[must_use]
pub fn log_dir_name(solution: &str, configuration: &str) -> String {
    format!(
        "{}{LOG_DIR_SEPARATOR}{configuration}",
        solution_digest(solution)
    )
}

/// Locations of the log files for one build request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildLogPaths {
    dir: PathBuf,
}

impl BuildLogPaths {
    /// Log paths for a (solution, configuration) pair under `logs_root`
    #[must_use]
    pub fn new(logs_root: &Path, solution: &str, configuration: &str) -> Self {
        Self {
            dir: logs_root.join(log_dir_name(solution, configuration)),
        }
    }

    /// The request's log directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full toolchain log
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.dir.join(MSBUILD_LOG_FILE)
    }

    /// Warnings and errors extracted by the toolchain logger
    #[must_use]
    pub fn issues_file(&self) -> PathBuf {
        self.dir.join(MSBUILD_ISSUES_FILE)
    }
}
