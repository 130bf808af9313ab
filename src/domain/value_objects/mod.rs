//! Value objects - immutable types with no identity

mod config_warning;
mod reserved_paths;

pub use config_warning::ConfigWarning;
pub use reserved_paths::{
    ReservedPaths, DEFAULT_BUILD_DIR, DEFAULT_MODULES_DIR, DEFAULT_QUIET_DIRS,
};
