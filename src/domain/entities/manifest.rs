//! Package manifest entity
//!
//! Only the fields slink cares about are read from `package.json`: the
//! package `name` and the optional `files` allow-list.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{SlinkError, SlinkResult};

/// File name of the package manifest inside a package root.
pub const MANIFEST_FILE: &str = "package.json";

/// The subset of `package.json` used for resolving and filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackageManifest {
    /// Declared package name.
    #[serde(default)]
    pub name: Option<String>,
    /// Declared shipped content. `None` means everything is shipped.
    #[serde(default)]
    pub files: Option<Vec<String>>,
}

impl PackageManifest {
    /// Path of the manifest inside `package_root`.
    pub fn path_in(package_root: &Path) -> PathBuf {
        package_root.join(MANIFEST_FILE)
    }

    /// Load the manifest from a package root.
    ///
    /// Returns `NotAnNpmPackage` if there is no manifest file.
    pub fn load(package_root: &Path) -> SlinkResult<Self> {
        let path = Self::path_in(package_root);
        if !path.is_file() {
            return Err(SlinkError::NotAnNpmPackage {
                path: package_root.to_path_buf(),
            });
        }

        let content = fs::read_to_string(&path)?;
        Self::parse(&path, &content)
    }

    /// Parse manifest JSON content. `file` is only used for error reporting.
    pub fn parse(file: &Path, content: &str) -> SlinkResult<Self> {
        serde_json::from_str(content).map_err(|e| SlinkError::InvalidManifest {
            file: file.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// The non-empty `files` list, if one was declared.
    pub fn file_spec(&self) -> Option<&[String]> {
        match &self.files {
            Some(files) if !files.is_empty() => Some(files.as_slice()),
            _ => None,
        }
    }
}
