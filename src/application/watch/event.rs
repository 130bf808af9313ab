//! Watch event types and options

use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;

/// Options shared by every session of a watch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchOptions {
    /// Pause between the end of one tick and the start of the next
    pub interval: Duration,
    /// Absolute path of the rebuild trigger file
    pub trigger_file: PathBuf,
    /// Nested dependency folder name (pruned)
    pub modules_dir: String,
    /// Build output folder name (pruned)
    pub build_dir: String,
    /// Folders whose changes are not reported
    pub quiet_dirs: Vec<String>,
}

impl WatchOptions {
    /// Options for a watch started from `cwd`.
    pub fn from_config(config: &Config, cwd: &std::path::Path) -> Self {
        Self {
            interval: config.watch.interval(),
            trigger_file: cwd.join(&config.watch.trigger_file),
            modules_dir: config.npm.modules_dir.clone(),
            build_dir: config.watch.build_dir.clone(),
            quiet_dirs: config.watch.quiet_dirs.clone(),
        }
    }
}

/// What happened to a single source entry during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// Destination directory created
    DirCreated,
    /// File copied to the destination
    Copied,
    /// File outside the package's shipped content
    Ignored,
    /// The package manifest changed; the session must end
    ManifestChanged,
}

/// A reportable change, with `path` relative to the package source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncEvent {
    pub package: String,
    pub path: PathBuf,
    pub action: SyncAction,
}

/// Counters for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    pub copied: usize,
    pub dirs_created: usize,
    pub ignored: usize,
    pub unchanged: usize,
    pub failed: usize,
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Completed(TickStats),
    /// The walk stopped at a manifest change
    ManifestChanged(TickStats),
}

impl TickOutcome {
    pub fn stats(&self) -> TickStats {
        match self {
            TickOutcome::Completed(stats) | TickOutcome::ManifestChanged(stats) => *stats,
        }
    }
}

/// Why a watch run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchExit {
    /// The cancellation token was triggered
    Cancelled,
    /// A package manifest changed mid-session
    ManifestChanged { package: String },
}
