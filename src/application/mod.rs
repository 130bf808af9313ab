//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//!
//! ## Use Cases
//!
//! - `resolve` - Locate a package's source and local install
//! - `watch` - Poll the source tree and mirror changes into the install
//! - `link` - Replace install entries with links to the source, once

pub mod link;
pub mod resolve;
pub mod watch;

pub use link::{link_package, LinkReport};
pub use resolve::{looks_like_path, PackageResolver};
pub use watch::{
    watch, CancellationToken, Scheduler, SyncAction, SyncEvent, SyncSession, TickOutcome,
    TickStats, WatchExit, WatchOptions,
};
