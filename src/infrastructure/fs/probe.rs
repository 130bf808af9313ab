//! Best-effort metadata probe
//!
//! Every stat during a sync tick goes through [`probe`]. Callers match on the
//! result and skip the entry on `Err`; a probe failure never aborts a walk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use thiserror::Error;

/// Kind of a probed entry (symlinks are followed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Other,
}

/// What a successful probe reports about an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMeta {
    pub kind: EntryKind,
    pub modified: SystemTime,
}

impl EntryMeta {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Why a probe could not report on an entry.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Entry vanished, is a dangling symlink, or is unreadable
    #[error("cannot stat {}: {source}", path.display())]
    Stat { path: PathBuf, source: io::Error },

    /// Platform does not expose a modification time
    #[error("no modification time for {}: {source}", path.display())]
    NoTimestamp { path: PathBuf, source: io::Error },
}

/// Stat `path`, following symlinks.
pub fn probe(path: &Path) -> Result<EntryMeta, ProbeError> {
    let meta = fs::metadata(path).map_err(|source| ProbeError::Stat {
        path: path.to_path_buf(),
        source,
    })?;

    let modified = meta.modified().map_err(|source| ProbeError::NoTimestamp {
        path: path.to_path_buf(),
        source,
    })?;

    let kind = if meta.is_dir() {
        EntryKind::Dir
    } else if meta.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    };

    Ok(EntryMeta { kind, modified })
}

/// Modification time of `path`, or `None` if it cannot be read.
pub fn modified_time(path: &Path) -> Option<SystemTime> {
    probe(path).ok().map(|meta| meta.modified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn probe_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "x").unwrap();

        let meta = probe(&file).unwrap();
        assert!(meta.is_file());
        assert!(!meta.is_dir());
    }

    #[test]
    fn probe_dir() {
        let dir = tempdir().unwrap();
        let meta = probe(dir.path()).unwrap();
        assert!(meta.is_dir());
    }

    #[test]
    fn probe_missing_is_error() {
        let dir = tempdir().unwrap();
        let err = probe(&dir.path().join("gone")).unwrap_err();
        assert!(matches!(err, ProbeError::Stat { .. }));
        assert!(modified_time(&dir.path().join("gone")).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn probe_dangling_symlink_is_error() {
        let dir = tempdir().unwrap();
        let link = dir.path().join("dangling");
        std::os::unix::fs::symlink(dir.path().join("nowhere"), &link).unwrap();

        assert!(probe(&link).is_err());
    }
}
