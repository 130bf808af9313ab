//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    ConfigWarning, DEFAULT_BUILD_DIR, DEFAULT_MODULES_DIR, DEFAULT_QUIET_DIRS,
};
use crate::error::SlinkResult;

use super::loader;

/// Package manager configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpmConfig {
    /// Global install prefix. Discovered through npm when unset.
    #[serde(default)]
    pub global_prefix: Option<PathBuf>,

    /// Local dependency folder name
    #[serde(default = "default_modules_dir")]
    pub modules_dir: String,
}

impl Default for NpmConfig {
    fn default() -> Self {
        Self {
            global_prefix: None,
            modules_dir: default_modules_dir(),
        }
    }
}

fn default_modules_dir() -> String {
    DEFAULT_MODULES_DIR.to_string()
}

/// Watch loop configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Pause between ticks, in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Rebuild trigger file, relative to the working directory
    #[serde(default = "default_trigger_file")]
    pub trigger_file: String,

    /// Build output folder pruned from the source tree
    #[serde(default = "default_build_dir")]
    pub build_dir: String,

    /// Folders whose changes are synced but not reported
    #[serde(default = "default_quiet_dirs")]
    pub quiet_dirs: Vec<String>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            trigger_file: default_trigger_file(),
            build_dir: default_build_dir(),
            quiet_dirs: default_quiet_dirs(),
        }
    }
}

/// Shortest pause between ticks; smaller settings are raised to it.
pub const MIN_INTERVAL_MS: u64 = 50;

impl WatchConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(MIN_INTERVAL_MS))
    }
}

fn default_interval_ms() -> u64 {
    1000
}

fn default_trigger_file() -> String {
    ".watch_trigger".to_string()
}

fn default_build_dir() -> String {
    DEFAULT_BUILD_DIR.to_string()
}

fn default_quiet_dirs() -> Vec<String> {
    DEFAULT_QUIET_DIRS.iter().map(|s| s.to_string()).collect()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub npm: NpmConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SlinkResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SlinkResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the effective configuration for a run from `cwd`.
    ///
    /// See [`loader::resolve`] for the lookup order.
    pub fn resolve(
        cwd: &Path,
        explicit: Option<&Path>,
    ) -> SlinkResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(cwd, explicit)
    }

    /// Apply environment variable overrides (SLINK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
