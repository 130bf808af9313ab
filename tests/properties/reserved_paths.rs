//! Property tests for traversal pruning and quiet folders.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use slink::domain::value_objects::ReservedPaths;

fn relative_path() -> impl Strategy<Value = PathBuf> {
    let segment = proptest::string::string_regex("[a-z0-9_]{1,8}").unwrap();
    proptest::collection::vec(segment, 0..=4)
        .prop_map(|segments| segments.iter().collect::<PathBuf>())
}

proptest! {
    /// PROPERTY: everything below a root-level dependency or build folder is pruned.
    #[test]
    fn property_reserved_subtrees_are_pruned(
        below in relative_path()
    ) {
        let root = Path::new("/src/pkg");
        let reserved = ReservedPaths::with_defaults(root);

        prop_assert!(reserved.is_within_pruned(&root.join("node_modules").join(&below)));
        prop_assert!(reserved.is_within_pruned(&root.join("target").join(&below)));
    }

    /// PROPERTY: reserved names nested below the root are never pruned.
    #[test]
    fn property_nested_reserved_names_are_walked(
        parent in relative_path(),
        below in relative_path()
    ) {
        prop_assume!(!parent.as_os_str().is_empty());
        let root = Path::new("/src/pkg");
        let reserved = ReservedPaths::with_defaults(root);

        let nested = root.join("lib").join(&parent).join("node_modules").join(&below);
        prop_assert!(!reserved.is_within_pruned(&nested));
    }

    /// PROPERTY: anything under a tool folder is quiet, wherever it sits.
    #[test]
    fn property_tool_folders_are_quiet(
        parent in relative_path(),
        below in relative_path()
    ) {
        let root = Path::new("/src/pkg");
        let reserved = ReservedPaths::with_defaults(root);

        let path = root.join(&parent).join(".git").join(&below);
        prop_assert!(reserved.is_quiet(root, &path));
    }
}
