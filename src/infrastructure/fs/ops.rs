//! Destination-side file operations
//!
//! Thin wrappers over `std::fs` used by the sync engine and the one-shot
//! link. Errors are returned to the caller; the sync engine decides whether
//! to swallow them.

use std::fs;
use std::io;
use std::path::Path;

/// Create `dir` (and parents) if missing. Returns `true` if it was created.
pub fn ensure_dir(dir: &Path) -> io::Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir)?;
    Ok(true)
}

/// Replace `dest` with a byte-for-byte copy of `source`.
///
/// Missing parent directories of `dest` are created. An existing `dest` is
/// removed first, so a read-only or hard-linked destination is not written
/// through.
pub fn replace_file(source: &Path, dest: &Path) -> io::Result<u64> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    match fs::symlink_metadata(dest) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(dest)?,
        Ok(_) => fs::remove_file(dest)?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    fs::copy(source, dest)
}

/// Overwrite `path` with `content`.
pub fn write_text(path: &Path, content: &str) -> io::Result<()> {
    fs::write(path, content)
}

/// Create an empty file at `path` unless one already exists.
///
/// Returns `true` if the file was created.
pub fn touch_if_absent(path: &Path) -> io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    fs::write(path, "")?;
    Ok(true)
}

/// Remove a file, symlink, or directory tree.
pub fn remove_entry(path: &Path) -> io::Result<()> {
    let meta = fs::symlink_metadata(path)?;
    if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// Create a symbolic link at `link` pointing to `target`.
#[cfg(unix)]
pub fn symlink_entry(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

/// Create a symbolic link at `link` pointing to `target`.
#[cfg(windows)]
pub fn symlink_entry(target: &Path, link: &Path) -> io::Result<()> {
    if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}
