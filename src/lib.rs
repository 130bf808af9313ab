//! slink - source-only package linking for local npm development
//!
//! slink keeps a package you are developing in step with the copy a
//! consuming project has installed in its `node_modules`. Rather than
//! linking the whole package (and with it the package's own dependency
//! folder), it polls the source tree and copies changed files into the
//! installed copy, which keeps that install's flattened, deduplicated
//! dependencies intact.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    link_package, watch, CancellationToken, LinkReport, PackageResolver, SyncAction, SyncEvent,
    WatchExit, WatchOptions,
};
pub use config::Config;
pub use domain::entities::ResolvedPackage;
pub use error::{SlinkError, SlinkResult};
pub use infrastructure::NpmPrefix;
