//! Package resolution
//!
//! Turns a user-supplied identifier (bare package name, scoped name, or a
//! path) into a [`ResolvedPackage`]: where the package is developed and where
//! the consuming project has it installed.

use std::path::{Path, PathBuf};

use crate::domain::entities::{PackageManifest, ResolvedPackage};
use crate::domain::ports::GlobalPrefix;
use crate::error::{SlinkError, SlinkResult};

/// Resolves package identifiers relative to a working directory.
pub struct PackageResolver<P> {
    cwd: PathBuf,
    modules_dir: String,
    prefix: P,
}

impl<P: GlobalPrefix> PackageResolver<P> {
    /// `cwd` is the consuming project; `modules_dir` its dependency folder.
    pub fn new(cwd: impl Into<PathBuf>, modules_dir: impl Into<String>, prefix: P) -> Self {
        Self {
            cwd: cwd.into(),
            modules_dir: modules_dir.into(),
            prefix,
        }
    }

    /// Resolve `identifier` and verify it is installed locally.
    pub fn resolve(&self, identifier: &str) -> SlinkResult<ResolvedPackage> {
        let source_root = self.locate_source(identifier)?;

        if !source_root.is_dir() {
            return Err(SlinkError::NotAnNpmPackage { path: source_root });
        }

        let manifest = PackageManifest::load(&source_root)?;
        let name = package_name(identifier, &source_root, &manifest);

        let destination_root = self.cwd.join(&self.modules_dir).join(&name);
        if !destination_root.is_dir() {
            return Err(SlinkError::NotInstalled {
                package: name,
                path: destination_root,
            });
        }

        if let Ok(real) = dunce::canonicalize(&destination_root) {
            if real == source_root {
                return Err(SlinkError::SameTree {
                    package: name,
                    path: destination_root,
                });
            }
        }

        tracing::debug!(
            package = %name,
            source = %source_root.display(),
            destination = %destination_root.display(),
            "resolved package"
        );

        Ok(ResolvedPackage {
            name,
            source_root,
            destination_root,
            manifest,
        })
    }

    /// Find the package source directory, with symlinks dereferenced.
    ///
    /// 1. identifier that looks like a path and exists
    /// 2. `<global modules dir>/<identifier>`
    /// 3. `<cwd>/<identifier>`
    pub fn locate_source(&self, identifier: &str) -> SlinkResult<PathBuf> {
        let local = self.cwd.join(identifier);

        let found = if looks_like_path(identifier) && local.exists() {
            Some(local)
        } else {
            let global = self
                .prefix
                .global_modules_dir()
                .map(|dir| dir.join(identifier))
                .filter(|p| p.exists());
            match global {
                Some(global) => Some(global),
                None => Some(local).filter(|p| p.exists()),
            }
        };

        let Some(found) = found else {
            return Err(SlinkError::NotLinked {
                package: identifier.to_string(),
            });
        };

        dunce::canonicalize(&found).map_err(|e| {
            tracing::debug!(path = %found.display(), error = %e, "cannot dereference package path");
            SlinkError::NotLinked {
                package: identifier.to_string(),
            }
        })
    }
}

/// True if `identifier` should be treated as a file system path first.
///
/// A scoped package name (`@scope/name`) is not a path even though it
/// contains a separator.
pub fn looks_like_path(identifier: &str) -> bool {
    if identifier.is_empty() {
        return false;
    }
    if Path::new(identifier).is_absolute() || identifier.starts_with('.') {
        return true;
    }
    if is_scoped_name(identifier) {
        return false;
    }
    identifier.contains('/') || identifier.contains('\\')
}

fn is_scoped_name(identifier: &str) -> bool {
    let Some(rest) = identifier.strip_prefix('@') else {
        return false;
    };
    match rest.split_once('/') {
        Some((scope, name)) => {
            !scope.is_empty() && !name.is_empty() && !name.contains('/') && !name.contains('\\')
        }
        None => false,
    }
}

fn package_name(identifier: &str, source_root: &Path, manifest: &PackageManifest) -> String {
    if let Some(name) = manifest.name.as_deref().filter(|n| !n.is_empty()) {
        return name.to_string();
    }
    if looks_like_path(identifier) {
        if let Some(dir_name) = source_root.file_name() {
            return dir_name.to_string_lossy().into_owned();
        }
    }
    identifier.to_string()
}
