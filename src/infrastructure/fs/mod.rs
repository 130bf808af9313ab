//! File system access
//!
//! Best-effort probing and walking for the source tree, plus the
//! destination-side operations applied by a sync.

mod config_dir;
pub mod ops;
pub mod probe;
pub mod walker;

pub use config_dir::{slink_config_dir, SLINK_TEST_CONFIG_DIR_VAR};
pub use probe::{modified_time, probe, EntryKind, EntryMeta, ProbeError};
pub use walker::{list_entries, walk_dirs, Visit, WalkEnd};
