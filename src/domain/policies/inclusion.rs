//! Inclusion policy
//!
//! Decides whether a source path lies within the content a package declares
//! as shipped (`files` in `package.json`). No declaration means everything
//! is of interest.
//!
//! Declared entries are classified against the file system at check time, so
//! an entry that does not exist yet is skipped and starts matching as soon as
//! it is created.

use std::fs;
use std::path::{Path, PathBuf};

/// Allow-list of shipped paths, resolved against a source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionFilter {
    entries: Option<Vec<PathBuf>>,
}

impl InclusionFilter {
    /// Build a filter from a manifest `files` list.
    ///
    /// `None` or an empty list yields a filter that accepts everything.
    pub fn new(source_root: &Path, file_spec: Option<&[String]>) -> Self {
        let entries = file_spec
            .filter(|spec| !spec.is_empty())
            .map(|spec| spec.iter().map(|entry| source_root.join(entry)).collect());
        Self { entries }
    }

    /// A filter that accepts every path.
    pub fn everything() -> Self {
        Self { entries: None }
    }

    /// True if no allow-list is in effect.
    pub fn includes_everything(&self) -> bool {
        self.entries.is_none()
    }

    /// Check whether `path` is covered by the allow-list.
    pub fn is_of_interest(&self, path: &Path) -> bool {
        let Some(entries) = &self.entries else {
            return true;
        };

        entries.iter().any(|entry| match fs::metadata(entry) {
            Ok(meta) if meta.is_dir() => is_within(path, entry),
            Ok(_) => path == entry,
            Err(_) => false,
        })
    }
}

/// Convenience form of [`InclusionFilter::is_of_interest`].
pub fn is_of_interest(path: &Path, source_root: &Path, file_spec: Option<&[String]>) -> bool {
    InclusionFilter::new(source_root, file_spec).is_of_interest(path)
}

/// True if `path` is `dir` or lies anywhere below it.
///
/// Walks the parent chain of `path` upward; `Path::parent` returns `None` at
/// the root or at the start of a relative path, so the walk always ends.
pub fn is_within(path: &Path, dir: &Path) -> bool {
    let mut current = Some(path);
    while let Some(candidate) = current {
        if candidate == dir {
            return true;
        }
        current = candidate.parent();
    }
    false
}
