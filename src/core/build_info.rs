//! Build request identity
//!
//! A [`BuildInfo`] describes one request to build a solution: which solution,
//! which configuration, which targets, whether to restore packages first, and
//! any extra toolchain properties.
//!
//! Two requests are the *same* request when they build the same solution with
//! the same configuration. Targets, the restore flag, and custom properties are
//! carried along for the toolchain invocation but take no part in equality or
//! hashing. A scheduler keyed on `BuildInfo` therefore holds at most one slot
//! per (solution, configuration) pair, and the request's logs land in a
//! directory derived from the same pair.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::logs::{self, BuildLogPaths};
use crate::error::BuildInfoError;

/// The part of a build request that identifies it
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BuildKey {
    solution: String,
    configuration: String,
}

impl BuildKey {
    /// Solution path
    pub fn solution(&self) -> &str {
        &self.solution
    }

    /// Configuration name
    pub fn configuration(&self) -> &str {
        &self.configuration
    }
}

impl fmt::Display for BuildKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.solution, self.configuration)
    }
}

/// One build request
///
/// Immutable once constructed. Use [`BuildInfo::new`] for a request without
/// custom properties, or [`BuildInfo::builder`] to append them before the
/// request is finalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawBuildInfo")]
pub struct BuildInfo {
    solution: String,
    targets: Vec<String>,
    configuration: String,
    restore: bool,
    custom_properties: Vec<String>,
}

impl BuildInfo {
    /// Create a build request with no custom properties
    ///
    /// Fails if `solution` or `configuration` is empty, or if `configuration`
    /// contains a path separator.
    pub fn new(
        solution: &str,
        targets: Vec<String>,
        configuration: &str,
        restore: bool,
    ) -> Result<Self, BuildInfoError> {
        Self::validated(
            solution.to_string(),
            targets,
            configuration.to_string(),
            restore,
            Vec::new(),
        )
    }

    /// Start building a request for `solution` in `configuration`
    pub fn builder(solution: &str, configuration: &str) -> BuildInfoBuilder {
        BuildInfoBuilder {
            solution: solution.to_string(),
            configuration: configuration.to_string(),
            targets: Vec::new(),
            restore: false,
            custom_properties: Vec::new(),
        }
    }

    fn validated(
        solution: String,
        targets: Vec<String>,
        configuration: String,
        restore: bool,
        custom_properties: Vec<String>,
    ) -> Result<Self, BuildInfoError> {
        if solution.is_empty() {
            return Err(BuildInfoError::EmptySolution);
        }
        if configuration.is_empty() {
            return Err(BuildInfoError::EmptyConfiguration { solution });
        }
        if !logs::is_dir_name_safe(&configuration) {
            return Err(BuildInfoError::InvalidConfiguration { configuration });
        }

        Ok(Self {
            solution,
            targets,
            configuration,
            restore,
            custom_properties,
        })
    }

    /// Solution path
    pub fn solution(&self) -> &str {
        &self.solution
    }

    /// Targets to build, in invocation order
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Configuration name (e.g. "Debug", "Release")
    pub fn configuration(&self) -> &str {
        &self.configuration
    }

    /// Whether packages are restored before compiling
    pub fn restore(&self) -> bool {
        self.restore
    }

    /// Extra toolchain properties, in invocation order
    pub fn custom_properties(&self) -> &[String] {
        &self.custom_properties
    }

    /// The (solution, configuration) key this request is deduplicated on
    pub fn key(&self) -> BuildKey {
        BuildKey {
            solution: self.solution.clone(),
            configuration: self.configuration.clone(),
        }
    }

    /// Log directory for this request under `logs_root`
    ///
    /// Pure path computation; the directory is not created.
    pub fn log_dir(&self, logs_root: &Path) -> PathBuf {
        logs_root.join(logs::log_dir_name(&self.solution, &self.configuration))
    }

    /// Log directory and log file locations for this request under `logs_root`
    pub fn log_paths(&self, logs_root: &Path) -> BuildLogPaths {
        BuildLogPaths::new(logs_root, &self.solution, &self.configuration)
    }
}

// Identity is (solution, configuration) only. Targets, restore, and custom
// properties must stay out of both impls so equal requests share a slot.
impl PartialEq for BuildInfo {
    fn eq(&self, other: &Self) -> bool {
        self.solution == other.solution && self.configuration == other.configuration
    }
}

impl Eq for BuildInfo {}

impl Hash for BuildInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.solution.hash(state);
        self.configuration.hash(state);
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.solution, self.configuration)
    }
}

/// Wire form of [`BuildInfo`], validated on the way in
#[derive(Deserialize)]
struct RawBuildInfo {
    solution: String,
    #[serde(default)]
    targets: Vec<String>,
    configuration: String,
    #[serde(default)]
    restore: bool,
    #[serde(default)]
    custom_properties: Vec<String>,
}

impl TryFrom<RawBuildInfo> for BuildInfo {
    type Error = BuildInfoError;

    fn try_from(raw: RawBuildInfo) -> Result<Self, Self::Error> {
        Self::validated(
            raw.solution,
            raw.targets,
            raw.configuration,
            raw.restore,
            raw.custom_properties,
        )
    }
}

/// Collects the optional parts of a build request
///
/// Custom properties can only be appended. [`BuildInfoBuilder::build`]
/// validates and freezes the request.
#[derive(Debug, Clone)]
pub struct BuildInfoBuilder {
    solution: String,
    configuration: String,
    targets: Vec<String>,
    restore: bool,
    custom_properties: Vec<String>,
}

impl BuildInfoBuilder {
    /// Append a target
    #[must_use]
    pub fn with_target(mut self, target: &str) -> Self {
        self.targets.push(target.to_string());
        self
    }

    /// Append several targets
    #[must_use]
    pub fn with_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets.extend(targets.into_iter().map(Into::into));
        self
    }

    /// Set whether packages are restored before compiling
    #[must_use]
    pub fn with_restore(mut self, restore: bool) -> Self {
        self.restore = restore;
        self
    }

    /// Append a custom toolchain property (usually `Key=Value`)
    #[must_use]
    pub fn with_property(mut self, property: &str) -> Self {
        self.custom_properties.push(property.to_string());
        self
    }

    /// Append several custom toolchain properties
    #[must_use]
    pub fn with_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_properties
            .extend(properties.into_iter().map(Into::into));
        self
    }

    /// Finalize the request
    pub fn build(self) -> Result<BuildInfo, BuildInfoError> {
        BuildInfo::validated(
            self.solution,
            self.targets,
            self.configuration,
            self.restore,
            self.custom_properties,
        )
    }
}
