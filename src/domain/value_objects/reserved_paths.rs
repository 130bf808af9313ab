//! Reserved paths value object
//!
//! Two kinds of reserved directories exist under a source root:
//! - pruned: the nested dependency folder and the build output folder are
//!   never traversed and never mirrored;
//! - quiet: VCS/IDE metadata folders are traversed normally but produce no
//!   user-facing notices.

use std::path::{Component, Path, PathBuf};

/// Default nested dependency folder name.
pub const DEFAULT_MODULES_DIR: &str = "node_modules";

/// Default build output folder name.
pub const DEFAULT_BUILD_DIR: &str = "target";

/// Default tool/VCS folders whose changes are not reported.
pub const DEFAULT_QUIET_DIRS: &[&str] = &[".git", ".idea", ".svn", ".hg", ".vscode"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedPaths {
    pruned: Vec<PathBuf>,
    quiet: Vec<String>,
}

impl ReservedPaths {
    /// Build the reserved set for `source_root`.
    pub fn new(
        source_root: &Path,
        modules_dir: &str,
        build_dir: &str,
        quiet_dirs: &[String],
    ) -> Self {
        Self {
            pruned: vec![source_root.join(modules_dir), source_root.join(build_dir)],
            quiet: quiet_dirs.to_vec(),
        }
    }

    /// Reserved set with the default folder names.
    pub fn with_defaults(source_root: &Path) -> Self {
        let quiet: Vec<String> = DEFAULT_QUIET_DIRS.iter().map(|s| s.to_string()).collect();
        Self::new(source_root, DEFAULT_MODULES_DIR, DEFAULT_BUILD_DIR, &quiet)
    }

    /// True if `path` is the root of a pruned subtree.
    pub fn is_pruned(&self, path: &Path) -> bool {
        self.pruned.iter().any(|p| p == path)
    }

    /// True if `path` lies inside (or is) a pruned subtree.
    pub fn is_within_pruned(&self, path: &Path) -> bool {
        self.pruned.iter().any(|p| path.starts_with(p))
    }

    /// True if any component of `path` below `root` is a quiet folder.
    pub fn is_quiet(&self, root: &Path, path: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        relative.components().any(|c| match c {
            Component::Normal(name) => self.quiet.iter().any(|q| name == q.as_str()),
            _ => false,
        })
    }
}
