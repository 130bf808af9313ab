//! Property tests for the inclusion filter and the descendant walk.

use std::fs;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use slink::domain::policies::{is_within, InclusionFilter};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,8}").unwrap()
}

fn relative_path() -> impl Strategy<Value = PathBuf> {
    proptest::collection::vec(segment(), 0..=5)
        .prop_map(|segments| segments.iter().collect::<PathBuf>())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the descendant walk terminates and never panics on arbitrary input.
    #[test]
    fn property_is_within_never_panics(
        path in "(?s).{0,128}",
        dir in "(?s).{0,64}"
    ) {
        let _ = is_within(Path::new(&path), Path::new(&dir));
    }

    /// PROPERTY: the descendant walk agrees with component-wise prefix matching.
    #[test]
    fn property_is_within_matches_component_prefix(
        base in relative_path(),
        below in relative_path(),
        other in relative_path()
    ) {
        let root = Path::new("/src");
        let dir = root.join(&base);

        prop_assert!(is_within(&dir.join(&below), &dir));

        let candidate = root.join(&other);
        prop_assert_eq!(is_within(&candidate, &dir), candidate.starts_with(&dir));
    }

    /// PROPERTY: declared entries that do not exist never match anything.
    #[test]
    fn property_missing_entries_match_nothing(
        entries in proptest::collection::vec(segment(), 1..4),
        path in relative_path()
    ) {
        let root = Path::new("/this/root/does/not/exist");
        let filter = InclusionFilter::new(root, Some(&entries));

        prop_assert!(!filter.is_of_interest(&root.join(path)));
    }

    /// PROPERTY: a path matches only if it lies under a declared directory.
    #[test]
    fn property_never_matches_outside_declared_dir(
        path in relative_path()
    ) {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("lib")).unwrap();
        let filter = InclusionFilter::new(root, Some(&["lib".to_string()]));

        let candidate = root.join(&path);
        prop_assert_eq!(
            filter.is_of_interest(&candidate),
            path.starts_with("lib")
        );
    }
}
