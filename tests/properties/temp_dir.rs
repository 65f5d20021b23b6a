//! Property tests for temp directory normalization.

use std::path::{Path, MAIN_SEPARATOR};

use proptest::prelude::*;

use upload_payload::domain::ports::normalize_temp_dir;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The result ends in exactly one separator, however many the
    /// input had.
    #[test]
    fn property_single_trailing_separator(
        base in "[A-Za-z0-9_.-]{1,32}",
        trailing in 0usize..4,
    ) {
        let raw = format!("{}{}", base, MAIN_SEPARATOR.to_string().repeat(trailing));

        let normalized = normalize_temp_dir(Path::new(&raw));
        let text = normalized.to_string_lossy();

        prop_assert!(text.ends_with(MAIN_SEPARATOR));
        prop_assert!(!text[..text.len() - 1].ends_with(MAIN_SEPARATOR));
    }

    /// PROPERTY: Normalization is idempotent.
    #[test]
    fn property_normalize_idempotent(raw in "[A-Za-z0-9_./-]{0,64}") {
        let once = normalize_temp_dir(Path::new(&raw));
        prop_assert_eq!(normalize_temp_dir(&once), once);
    }
}
