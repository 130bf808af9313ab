//! Property tests for the per-session timestamp record.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use proptest::prelude::*;

use slink::domain::entities::{Observation, SyncRecord};

fn observation() -> impl Strategy<Value = (u8, u64)> {
    (0u8..6, 0u64..4)
}

proptest! {
    /// PROPERTY: a timestamp is acted on at most once per path.
    ///
    /// Observing the same (path, time) twice in a row is always `Unchanged`,
    /// and the record agrees with a plain map model.
    #[test]
    fn property_record_matches_map_model(
        steps in proptest::collection::vec(observation(), 0..64)
    ) {
        let mut record = SyncRecord::new();
        let mut model: HashMap<PathBuf, SystemTime> = HashMap::new();

        for (file, secs) in steps {
            let path = PathBuf::from(format!("/src/f{file}"));
            let time = UNIX_EPOCH + Duration::from_secs(secs);

            let expected = match model.insert(path.clone(), time) {
                None => Observation::New,
                Some(previous) if previous == time => Observation::Unchanged,
                Some(previous) => Observation::Changed { previous },
            };

            prop_assert_eq!(record.observe(&path, time), expected);
            prop_assert_eq!(record.observe(&path, time), Observation::Unchanged);
        }

        prop_assert_eq!(record.len(), model.len());
    }
}
