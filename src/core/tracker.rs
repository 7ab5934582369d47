//! In-flight build tracking
//!
//! Keeps at most one running request per (solution, configuration) pair.
//! A second request for a pair that is already building is reported back
//! with the request that holds the slot, so the caller can wait on it
//! instead of starting a duplicate build.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::core::build_info::{BuildInfo, BuildKey};

/// Outcome of [`BuildTracker::begin`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildSlot {
    /// The slot was free and now belongs to the request
    Started,
    /// An equal request is already running
    AlreadyRunning(BuildInfo),
}

/// Registry of running build requests
#[derive(Debug, Default)]
pub struct BuildTracker {
    running: Mutex<HashMap<BuildKey, BuildInfo>>,
}

impl BuildTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<BuildKey, BuildInfo>> {
        // Every critical section leaves the map consistent, so a poisoned lock is still usable.
        self.running
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Claim the slot for `info`
    pub fn begin(&self, info: BuildInfo) -> BuildSlot {
        let mut running = self.lock();
        let key = info.key();

        if let Some(existing) = running.get(&key) {
            tracing::warn!("Build already running for {key}, not starting a duplicate");
            return BuildSlot::AlreadyRunning(existing.clone());
        }

        tracing::debug!("Build started for {key}");
        running.insert(key, info);
        BuildSlot::Started
    }

    /// Release the slot held for `key`
    ///
    /// Returns the request that held it, if any.
    pub fn finish(&self, key: &BuildKey) -> Option<BuildInfo> {
        let finished = self.lock().remove(key);
        if finished.is_some() {
            tracing::debug!("Build finished for {key}");
        }
        finished
    }

    /// Whether a request equal to `info` is running
    pub fn is_running(&self, info: &BuildInfo) -> bool {
        self.lock().contains_key(&info.key())
    }

    /// Number of running requests
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing is running
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of running requests, ordered by key
    pub fn running(&self) -> Vec<BuildInfo> {
        let running = self.lock();
        let mut keys: Vec<&BuildKey> = running.keys().collect();
        keys.sort();
        keys.into_iter().map(|k| running[k].clone()).collect()
    }
}
