//! Error types for slink
//!
//! Uses `thiserror` for library errors. Startup resolution errors are fatal;
//! per-entry failures inside a sync tick never reach this type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for slink operations
pub type SlinkResult<T> = Result<T, SlinkError>;

/// Main error type for slink operations
#[derive(Error, Debug)]
pub enum SlinkError {
    /// Package could not be found globally or as a local path
    #[error("package '{package}' has not yet been globally linked. You must go there and link it first")]
    NotLinked { package: String },

    /// Path exists but carries no package manifest
    #[error("'{}' is not an npm package (no package.json found)", path.display())]
    NotAnNpmPackage { path: PathBuf },

    /// Local install of the package is missing
    #[error("package '{package}' has not yet been installed in this package/project (missing {})", path.display())]
    NotInstalled { package: String, path: PathBuf },

    /// One-shot link already applied to this install
    #[error("package '{package}' has already been slink'd. You must reinstall it if you wish to reslink it (npm install)")]
    AlreadyLinked { package: String },

    /// Local install is a link back to the source tree
    #[error("package '{package}' is installed as a link to its own source ({}). Run npm install to get a real copy first", path.display())]
    SameTree { package: String, path: PathBuf },

    /// Manifest exists but could not be parsed
    #[error("invalid package manifest {}: {message}", file.display())]
    InvalidManifest { file: PathBuf, message: String },

    /// Config file could not be parsed
    #[error("invalid config file {}: {message}", file.display())]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_linked() {
        let err = SlinkError::NotLinked {
            package: "my-cool-package".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "package 'my-cool-package' has not yet been globally linked. You must go there and link it first"
        );
    }

    #[test]
    fn test_error_display_not_installed() {
        let err = SlinkError::NotInstalled {
            package: "left-pad".to_string(),
            path: PathBuf::from("node_modules/left-pad"),
        };
        assert_eq!(
            err.to_string(),
            "package 'left-pad' has not yet been installed in this package/project (missing node_modules/left-pad)"
        );
    }

    #[test]
    fn test_error_display_not_an_npm_package() {
        let err = SlinkError::NotAnNpmPackage {
            path: PathBuf::from("../dev/thing"),
        };
        assert_eq!(
            err.to_string(),
            "'../dev/thing' is not an npm package (no package.json found)"
        );
    }
}
