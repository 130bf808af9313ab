//! Global prefix port
//!
//! The package manager owns the location of globally linked packages. slink
//! only needs the prefix directory; how it is discovered is up to the
//! implementation (config, environment, or asking `npm`).

use std::path::PathBuf;

/// Source of the package manager's global install prefix.
pub trait GlobalPrefix {
    /// The global prefix, or `None` if it cannot be determined.
    fn global_prefix(&self) -> Option<PathBuf>;

    /// Directory holding globally linked packages under the prefix.
    fn global_modules_dir(&self) -> Option<PathBuf> {
        self.global_prefix().map(|prefix| {
            if cfg!(windows) {
                prefix.join("node_modules")
            } else {
                prefix.join("lib").join("node_modules")
            }
        })
    }
}

/// Fixed prefix, used when the prefix is already known.
#[derive(Debug, Clone, Default)]
pub struct FixedPrefix(pub Option<PathBuf>);

impl GlobalPrefix for FixedPrefix {
    fn global_prefix(&self) -> Option<PathBuf> {
        self.0.clone()
    }
}
