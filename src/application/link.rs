//! One-shot source link
//!
//! Replaces every top-level entry of a local install that also exists in the
//! package source with a symbolic link to the source entry. The nested
//! dependency folder and the manifest are left alone, so the install keeps
//! its flattened, deduplicated dependencies.
//!
//! A marker file guards against linking the same install twice.

use std::fs;

use crate::domain::entities::{ResolvedPackage, MANIFEST_FILE};
use crate::error::{SlinkError, SlinkResult};
use crate::infrastructure::fs::ops;

/// What a link run changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkReport {
    /// Top-level entry names replaced by links, sorted
    pub linked: Vec<String>,
    /// Source entries with no counterpart in the install, sorted
    pub skipped: Vec<String>,
}

/// Link `package`'s source entries into its local install.
pub fn link_package(package: &ResolvedPackage, modules_dir: &str) -> SlinkResult<LinkReport> {
    if package.marker_path().exists() {
        return Err(SlinkError::AlreadyLinked {
            package: package.name.clone(),
        });
    }

    let mut report = LinkReport::default();

    for entry in fs::read_dir(&package.source_root)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == modules_dir || name == MANIFEST_FILE {
            continue;
        }

        let local = package.destination_root.join(&name);
        if fs::symlink_metadata(&local).is_err() {
            report.skipped.push(name);
            continue;
        }

        ops::remove_entry(&local)?;
        ops::symlink_entry(&entry.path(), &local)?;
        tracing::debug!(entry = %name, "linked");
        report.linked.push(name);
    }

    ops::touch_if_absent(&package.marker_path())?;

    report.linked.sort();
    report.skipped.sort();
    Ok(report)
}
