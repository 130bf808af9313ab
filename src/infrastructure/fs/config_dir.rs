//! User config directory resolution with test isolation support.
//!
//! `dirs::config_dir()` uses platform APIs that ignore environment overrides
//! on some systems, so tests set `SLINK_TEST_CONFIG_DIR` instead.

use std::path::PathBuf;

/// Environment variable that overrides the user config directory.
pub const SLINK_TEST_CONFIG_DIR_VAR: &str = "SLINK_TEST_CONFIG_DIR";

/// Directory holding slink's user configuration (`<config dir>/slink`).
pub fn slink_config_dir() -> Option<PathBuf> {
    config_dir_with(|key| std::env::var(key).ok(), dirs::config_dir)
}

fn config_dir_with(
    get_env: impl Fn(&str) -> Option<String>,
    platform_dir: impl FnOnce() -> Option<PathBuf>,
) -> Option<PathBuf> {
    get_env(SLINK_TEST_CONFIG_DIR_VAR)
        .map(PathBuf::from)
        .or_else(platform_dir)
        .map(|dir| dir.join("slink"))
}
