//! Domain entities

pub mod manifest;
pub mod package;
pub mod sync_record;

pub use manifest::{PackageManifest, MANIFEST_FILE};
pub use package::{ResolvedPackage, MARKER_FILE};
pub use sync_record::{Observation, SyncRecord};
