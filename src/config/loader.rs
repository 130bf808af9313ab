//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{SlinkError, SlinkResult};
use crate::infrastructure::fs::slink_config_dir;

use super::types::{Config, Verbosity};

/// Project-level config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".slink.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SlinkResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(path, &content)
}

/// Parse TOML config content. `path` is used for errors and warnings.
pub fn parse_with_warnings(path: &Path, content: &str) -> SlinkResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SlinkError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective configuration.
///
/// 1. `explicit` path, if given (must exist)
/// 2. `<cwd>/.slink.toml`
/// 3. `<user config dir>/slink/config.toml`
/// 4. Built-in defaults
///
/// Environment overrides are applied last.
pub fn resolve(cwd: &Path, explicit: Option<&Path>) -> SlinkResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => candidate_files(cwd).into_iter().find(|p| p.is_file()),
    };

    let (config, warnings) = match candidate {
        Some(path) => {
            tracing::debug!(config = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

fn candidate_files(cwd: &Path) -> Vec<PathBuf> {
    let mut files = vec![cwd.join(PROJECT_CONFIG_FILE)];
    if let Some(dir) = slink_config_dir() {
        files.push(dir.join("config.toml"));
    }
    files
}

/// Apply environment variable overrides (SLINK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

fn with_env_overrides_from(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    // SLINK_GLOBAL_PREFIX
    if let Some(prefix) = get_env("SLINK_GLOBAL_PREFIX").filter(|v| !v.is_empty()) {
        config.npm.global_prefix = Some(PathBuf::from(prefix));
    }

    // SLINK_INTERVAL_MS
    if let Some(ms) = get_env("SLINK_INTERVAL_MS").and_then(|v| v.trim().parse().ok()) {
        config.watch.interval_ms = ms;
    }

    // SLINK_TRIGGER_FILE
    if let Some(file) = get_env("SLINK_TRIGGER_FILE").filter(|v| !v.is_empty()) {
        config.watch.trigger_file = file;
    }

    // SLINK_BUILD_DIR
    if let Some(dir) = get_env("SLINK_BUILD_DIR").filter(|v| !v.is_empty()) {
        config.watch.build_dir = dir;
    }

    // SLINK_VERBOSITY
    if let Some(verbosity) = get_env("SLINK_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            _ => Verbosity::Normal,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "npm",
        "global_prefix",
        "modules_dir",
        "watch",
        "interval_ms",
        "trigger_file",
        "build_dir",
        "quiet_dirs",
        "output",
        "verbosity",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
pub(super) fn overrides_for_test(config: Config, vars: &[(&str, &str)]) -> Config {
    with_env_overrides_from(config, |key| {
        vars.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    })
}

#[cfg(test)]
pub(super) fn suggest_for_test(key: &str) -> Option<String> {
    suggest_key(key)
}
