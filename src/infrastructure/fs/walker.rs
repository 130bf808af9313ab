//! Pruning directory walker
//!
//! Depth-first, pre-order traversal that calls a visitor once per directory
//! before descending into it. The visitor decides whether to descend, skip
//! the subtree, or stop the walk altogether.
//!
//! Symlinked directories are followed and visited under their link path.
//! A directory whose real location is already on the current branch is
//! skipped, so link cycles cannot trap the walk.

use std::fs;
use std::path::{Path, PathBuf};

/// Visitor decision for a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Descend into every subdirectory
    Descend,
    /// Skip this directory's subtree
    Prune,
    /// End the walk immediately
    Stop,
}

/// How a walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEnd {
    Completed,
    Stopped,
}

/// Walk the directory tree rooted at `root`.
///
/// A missing or unreadable root yields an empty walk. Directories that
/// vanish or become unreadable mid-walk are skipped.
pub fn walk_dirs<F>(root: &Path, mut visitor: F) -> WalkEnd
where
    F: FnMut(&Path) -> Visit,
{
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return WalkEnd::Completed,
        Err(e) => {
            tracing::debug!(root = %root.display(), error = %e, "walk root not available");
            return WalkEnd::Completed;
        }
    }

    // Each pending directory carries the real paths of its ancestors.
    let mut stack: Vec<(PathBuf, Vec<PathBuf>)> = vec![(root.to_path_buf(), Vec::new())];

    while let Some((dir, mut ancestors)) = stack.pop() {
        let real = match dunce::canonicalize(&dir) {
            Ok(real) => real,
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "directory vanished");
                continue;
            }
        };
        if ancestors.contains(&real) {
            tracing::debug!(dir = %dir.display(), target = %real.display(), "skipping link cycle");
            continue;
        }

        match visitor(&dir) {
            Visit::Stop => return WalkEnd::Stopped,
            Visit::Prune => continue,
            Visit::Descend => {}
        }

        ancestors.push(real);
        let mut children = subdirectories(&dir);
        // Pop order follows listing order.
        children.reverse();
        stack.extend(children.into_iter().map(|child| (child, ancestors.clone())));
    }

    WalkEnd::Completed
}

/// Immediate entries of `dir`, in listing order.
///
/// Unreadable directories and entries are skipped.
pub fn list_entries(dir: &Path) -> Vec<PathBuf> {
    match fs::read_dir(dir) {
        Ok(entries) => entries.filter_map(|e| e.ok()).map(|e| e.path()).collect(),
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "cannot list directory");
            Vec::new()
        }
    }
}

fn subdirectories(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false))
        .collect()
}
