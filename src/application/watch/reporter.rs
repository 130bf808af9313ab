//! Change reporting policy
//!
//! Decides which sync events reach the user. The initial tick mirrors the
//! whole package silently, and activity under tool/VCS folders is never
//! reported. A manifest change is always reported.

use std::path::Path;

use crate::domain::value_objects::ReservedPaths;

use super::event::SyncAction;

#[derive(Debug, Clone)]
pub struct ChangeReporter {
    reserved: ReservedPaths,
}

impl ChangeReporter {
    pub fn new(reserved: ReservedPaths) -> Self {
        Self { reserved }
    }

    /// `absolute` is the source path the event refers to.
    pub fn should_report(
        &self,
        source_root: &Path,
        absolute: &Path,
        action: SyncAction,
        initial_tick: bool,
    ) -> bool {
        match action {
            SyncAction::ManifestChanged => true,
            _ => !initial_tick && !self.reserved.is_quiet(source_root, absolute),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reporter() -> ChangeReporter {
        ChangeReporter::new(ReservedPaths::with_defaults(Path::new("/p")))
    }

    #[test]
    fn initial_tick_is_silent() {
        let r = reporter();
        let root = Path::new("/p");
        assert!(!r.should_report(root, Path::new("/p/lib/a.js"), SyncAction::Copied, true));
        assert!(r.should_report(root, Path::new("/p/lib/a.js"), SyncAction::Copied, false));
    }

    #[test]
    fn tool_folders_are_silent() {
        let r = reporter();
        let root = Path::new("/p");
        assert!(!r.should_report(root, Path::new("/p/.git/index"), SyncAction::Ignored, false));
        assert!(!r.should_report(root, Path::new("/p/.idea/x.xml"), SyncAction::Copied, false));
    }

    #[test]
    fn manifest_change_always_reported() {
        let r = reporter();
        let root = Path::new("/p");
        assert!(r.should_report(
            root,
            Path::new("/p/package.json"),
            SyncAction::ManifestChanged,
            true
        ));
    }
}
