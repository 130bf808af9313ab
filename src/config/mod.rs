//! Configuration module for slink
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (SLINK_*)
//! 3. Explicit `--config` file, else `./.slink.toml`, else
//!    `<user config dir>/slink/config.toml`
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;
pub use loader::PROJECT_CONFIG_FILE;
pub use types::{ColorMode, Config, NpmConfig, OutputConfig, Verbosity, WatchConfig};
