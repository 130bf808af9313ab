//! Resolved package entity

use std::path::{Path, PathBuf};

use super::manifest::PackageManifest;

/// Name of the one-time marker file written into a destination under sync.
pub const MARKER_FILE: &str = ".slink";

/// A package whose source and local install locations have been resolved.
///
/// Immutable for the life of a watch session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPackage {
    /// Package name (manifest `name`, or the identifier given by the user)
    pub name: String,
    /// Absolute, symlink-free path of the package under development
    pub source_root: PathBuf,
    /// The consuming project's local install of the package
    pub destination_root: PathBuf,
    /// Manifest read once at resolution time
    pub manifest: PackageManifest,
}

impl ResolvedPackage {
    /// Path of the manifest file inside the source root.
    pub fn manifest_path(&self) -> PathBuf {
        PackageManifest::path_in(&self.source_root)
    }

    /// Path of the marker file inside the destination root.
    pub fn marker_path(&self) -> PathBuf {
        self.destination_root.join(MARKER_FILE)
    }

    /// Map a path inside the source root onto the destination tree.
    ///
    /// Returns `None` for paths outside the source root.
    pub fn destination_for(&self, source_path: &Path) -> Option<PathBuf> {
        source_path
            .strip_prefix(&self.source_root)
            .ok()
            .map(|relative| self.destination_root.join(relative))
    }

    /// Display form of a source path relative to the source root.
    pub fn relative_display(&self, source_path: &Path) -> String {
        source_path
            .strip_prefix(&self.source_root)
            .unwrap_or(source_path)
            .display()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package() -> ResolvedPackage {
        ResolvedPackage {
            name: "pkg".to_string(),
            source_root: PathBuf::from("/dev/pkg"),
            destination_root: PathBuf::from("/app/node_modules/pkg"),
            manifest: PackageManifest::default(),
        }
    }

    #[test]
    fn destination_for_maps_relative_path() {
        let pkg = package();
        assert_eq!(
            pkg.destination_for(Path::new("/dev/pkg/lib/a.js")),
            Some(PathBuf::from("/app/node_modules/pkg/lib/a.js"))
        );
    }

    #[test]
    fn destination_for_rejects_outside_paths() {
        let pkg = package();
        assert_eq!(pkg.destination_for(Path::new("/dev/other/a.js")), None);
    }

    #[test]
    fn relative_display_strips_root() {
        let pkg = package();
        assert_eq!(
            pkg.relative_display(Path::new("/dev/pkg/lib/a.js")),
            Path::new("lib").join("a.js").display().to_string()
        );
    }

    #[test]
    fn marker_and_manifest_paths() {
        let pkg = package();
        assert_eq!(
            pkg.marker_path(),
            PathBuf::from("/app/node_modules/pkg/.slink")
        );
        assert_eq!(pkg.manifest_path(), PathBuf::from("/dev/pkg/package.json"));
    }
}
