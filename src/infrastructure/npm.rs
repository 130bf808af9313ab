//! npm global prefix discovery
//!
//! Lookup order: explicit prefix (config or `SLINK_GLOBAL_PREFIX`), then
//! `NPM_CONFIG_PREFIX`, then `npm prefix -g`. The `npm` call is made at most
//! once per process.

use std::path::PathBuf;
use std::process::Command;
use std::sync::OnceLock;

use crate::domain::ports::GlobalPrefix;

/// npm's own environment override for the global prefix.
pub const NPM_CONFIG_PREFIX_VAR: &str = "NPM_CONFIG_PREFIX";

/// Global prefix resolved through npm.
#[derive(Debug, Default)]
pub struct NpmPrefix {
    configured: Option<PathBuf>,
    discovered: OnceLock<Option<PathBuf>>,
}

impl NpmPrefix {
    /// `configured` takes precedence over anything npm reports.
    pub fn new(configured: Option<PathBuf>) -> Self {
        Self {
            configured,
            discovered: OnceLock::new(),
        }
    }

    fn discover() -> Option<PathBuf> {
        if let Some(prefix) = std::env::var_os(NPM_CONFIG_PREFIX_VAR) {
            if !prefix.is_empty() {
                return Some(PathBuf::from(prefix));
            }
        }
        query_npm()
    }
}

impl GlobalPrefix for NpmPrefix {
    fn global_prefix(&self) -> Option<PathBuf> {
        if let Some(prefix) = &self.configured {
            return Some(prefix.clone());
        }
        self.discovered.get_or_init(Self::discover).clone()
    }
}

fn npm_program() -> &'static str {
    if cfg!(windows) {
        "npm.cmd"
    } else {
        "npm"
    }
}

fn query_npm() -> Option<PathBuf> {
    let output = match Command::new(npm_program()).args(["prefix", "-g"]).output() {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!(error = %e, "npm not available for global prefix lookup");
            return None;
        }
    };

    if !output.status.success() {
        tracing::debug!(status = ?output.status, "npm prefix -g failed");
        return None;
    }

    parse_prefix_output(&String::from_utf8_lossy(&output.stdout))
}

fn parse_prefix_output(stdout: &str) -> Option<PathBuf> {
    stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(PathBuf::from)
}
