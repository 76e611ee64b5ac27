use jscrub::sanitize::{sanitize_slice, sanitize_str, ScrubOptions};
use proptest::prelude::*;
use serde_json::Value;

mod proptest_helpers;

/// True if any string value or object key still contains a character the
/// sanitizer is supposed to strip.
fn has_disallowed(value: &Value) -> bool {
    fn bad(s: &str) -> bool {
        s.chars().any(|c| {
            matches!(c, '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}' | '\u{7F}')
        })
    }

    match value {
        Value::String(s) => bad(s),
        Value::Array(items) => items.iter().any(has_disallowed),
        Value::Object(members) => members.iter().any(|(k, v)| bad(k) || has_disallowed(v)),
        _ => false,
    }
}

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn accepted_documents_always_roundtrip(
        value in proptest_helpers::arb_json(4)
            .prop_filter("root must not be null", |v| !v.is_null())
    ) {
        let json = serde_json::to_string(&value).expect("serialize generated document");
        let out = sanitize_str(&json, &ScrubOptions::default()).expect("sanitize");

        let reencoded = serde_json::to_string(&out.value).expect("re-encode sanitized value");
        let reparsed: Value = serde_json::from_str(&reencoded).expect("re-parse sanitized text");

        prop_assert_eq!(&reparsed, &out.value);
        prop_assert!(!has_disallowed(&out.value));
    }

    #[test]
    fn sanitization_is_idempotent(
        value in proptest_helpers::arb_json(4)
            .prop_filter("root must not be null", |v| !v.is_null())
    ) {
        let json = serde_json::to_string(&value).expect("serialize generated document");
        let first = sanitize_str(&json, &ScrubOptions::default()).expect("first pass");

        let second_json = serde_json::to_string(&first.value).expect("serialize first pass");
        let second = sanitize_str(&second_json, &ScrubOptions::default()).expect("second pass");

        prop_assert!(second.report.is_clean());
        prop_assert_eq!(&first.value, &second.value);
    }

    #[test]
    fn classification_is_deterministic(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let first = sanitize_slice(&bytes, &ScrubOptions::default());
        let second = sanitize_slice(&bytes, &ScrubOptions::default());

        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a.value, b.value),
            (Err(a), Err(b)) => prop_assert_eq!(a.kind(), b.kind()),
            _ => prop_assert!(false, "identical input classified differently"),
        }
    }

    #[test]
    fn clean_documents_report_no_actions(
        value in proptest_helpers::arb_json(4)
            .prop_filter("root must not be null", |v| !v.is_null())
    ) {
        let json = serde_json::to_string(&value).expect("serialize generated document");
        let first = sanitize_str(&json, &ScrubOptions::default()).expect("sanitize");

        // A report is empty exactly when the document was already clean.
        prop_assert_eq!(first.report.is_clean(), !has_disallowed(&value) && first.value == value);
    }
}
