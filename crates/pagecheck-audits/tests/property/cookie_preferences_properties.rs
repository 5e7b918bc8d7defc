use pagecheck_audits::artifacts::LinkRecord;
use pagecheck_audits::audits::legal::{CookiePreferencesAudit, COOKIE_PREFERENCES_MARKER};
use proptest::prelude::*;
use serde_json::Value;

/// Autoids drawn from a small pool so matches are common, plus arbitrary noise.
fn autoid() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(Some(COOKIE_PREFERENCES_MARKER.to_string())),
        Just(Some("dds--footer-legal-privacy".to_string())),
        Just(None),
        "[a-z-]{0,20}".prop_map(Some),
    ]
}

fn records() -> impl Strategy<Value = Vec<LinkRecord>> {
    prop::collection::vec(
        autoid().prop_map(|autoid| LinkRecord {
            data_autoid: autoid.map(Value::String),
            ..Default::default()
        }),
        0..12,
    )
}

proptest! {
    #[test]
    fn score_is_one_iff_marker_present(links in records()) {
        let expected = links
            .iter()
            .any(|l| l.identifying_attribute() == Some(COOKIE_PREFERENCES_MARKER));
        let result = CookiePreferencesAudit::evaluate(&links);
        prop_assert_eq!(result.raw_value, expected);
        prop_assert_eq!(result.score, u8::from(expected));
    }

    #[test]
    fn evaluation_is_idempotent(links in records()) {
        prop_assert_eq!(
            CookiePreferencesAudit::evaluate(&links),
            CookiePreferencesAudit::evaluate(&links)
        );
    }

    #[test]
    fn order_does_not_matter(links in records(), rotate in 0usize..12) {
        let mut permuted = links.clone();
        permuted.reverse();
        if !permuted.is_empty() {
            let k = rotate % permuted.len();
            permuted.rotate_left(k);
        }
        prop_assert_eq!(
            CookiePreferencesAudit::evaluate(&links),
            CookiePreferencesAudit::evaluate(&permuted)
        );
    }

    #[test]
    fn non_matching_records_do_not_change_outcome(
        links in records(),
        noise in prop::collection::vec("[a-z]{1,10}", 0..6),
    ) {
        let mut padded = links.clone();
        padded.extend(noise.into_iter().map(LinkRecord::with_autoid));
        prop_assert_eq!(
            CookiePreferencesAudit::evaluate(&links),
            CookiePreferencesAudit::evaluate(&padded)
        );
    }
}
