//! Per-session record of processed modification timestamps

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Mapping from absolute source path to the last modification time processed.
///
/// Grows monotonically for the life of a watch session and is never
/// persisted.
#[derive(Debug, Default, Clone)]
pub struct SyncRecord {
    seen: HashMap<PathBuf, SystemTime>,
}

/// Result of observing a timestamp for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// Same timestamp as last recorded; nothing to do.
    Unchanged,
    /// First time this path is seen.
    New,
    /// Path was seen before with a different timestamp.
    Changed { previous: SystemTime },
}

impl SyncRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `modified` for `path`, reporting how it compares to the last value.
    ///
    /// The new value is stored before the caller acts on it, so a failure
    /// later in processing does not cause the same timestamp to be retried.
    pub fn observe(&mut self, path: &Path, modified: SystemTime) -> Observation {
        match self.seen.insert(path.to_path_buf(), modified) {
            Some(previous) if previous == modified => Observation::Unchanged,
            Some(previous) => Observation::Changed { previous },
            None => Observation::New,
        }
    }

    /// Last recorded timestamp for `path`.
    pub fn get(&self, path: &Path) -> Option<SystemTime> {
        self.seen.get(path).copied()
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Iterate over all recorded paths.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.seen.keys().map(PathBuf::as_path)
    }
}
