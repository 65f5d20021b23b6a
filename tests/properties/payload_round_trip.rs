//! Property tests for payload contents and cleanup.

use proptest::prelude::*;

use crate::common::{unzip_payload, Workspace};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any readable file decodes to exactly one entry holding its
    /// bytes, and nothing is left in the temp directory.
    #[test]
    fn property_payload_holds_file_bytes(
        contents in proptest::collection::vec(any::<u8>(), 0..4096),
        ext in "[a-z0-9]{1,5}",
    ) {
        let ws = Workspace::new();
        let source = ws.source(&format!("input.{ext}"), &contents);

        let payload = ws.builder().build_payload(&source).unwrap();
        let entries = unzip_payload(payload.as_str());

        prop_assert_eq!(entries.len(), 1);
        let expected_suffix = format!(".{}", ext);
        prop_assert!(entries[0].0.ends_with(&expected_suffix));
        prop_assert_eq!(&entries[0].1, &contents);
        prop_assert!(ws.leftovers().is_empty());
    }

    /// PROPERTY: Missing paths always fail with InvalidArgument and write nothing.
    #[test]
    fn property_missing_paths_are_invalid(
        name in "[A-Za-z0-9_-]{1,24}",
    ) {
        let ws = Workspace::new();
        let missing = ws.sources.path().join(&name);

        let err = ws.builder().build_payload(&missing).unwrap_err();

        let is_invalid_argument =
            matches!(err, upload_payload::UploadError::InvalidArgument { .. });
        prop_assert!(is_invalid_argument);
        prop_assert!(ws.leftovers().is_empty());
    }
}
