//! Tests for the artifact bundle.

use serde_json::json;

use pagecheck_audits::artifacts::{Artifacts, LinkRecord};
use pagecheck_core::errors::InvalidArtifactError;

/// Link records keep attributes they do not interpret.
#[test]
fn test_link_record_keeps_extra_attributes() {
    let artifacts = Artifacts::from_json(
        r#"{ "Links": [ { "dataAutoid": "x", "href": "/a", "rel": ["noopener"] } ] }"#,
    )
    .unwrap();
    let links: Vec<LinkRecord> = artifacts.records("Links").unwrap();

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].identifying_attribute(), Some("x"));
    assert_eq!(links[0].attributes.get("href"), Some(&json!("/a")));
    assert_eq!(links[0].attributes.get("rel"), Some(&json!(["noopener"])));
    assert!(!links[0].attributes.contains_key("dataAutoid"));
}

/// Serializing a record restores the gatherer's shape.
#[test]
fn test_link_record_serializes_back() {
    let mut record = LinkRecord::with_autoid("dds--privacy-cp");
    record.attributes.insert("href".to_string(), json!("#"));
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({ "dataAutoid": "dds--privacy-cp", "href": "#" })
    );
    assert_eq!(
        serde_json::to_value(LinkRecord::default()).unwrap(),
        json!({})
    );
}

/// An empty array is a valid, empty sequence.
#[test]
fn test_empty_sequence() {
    let artifacts = Artifacts::from_json(r#"{ "Links": [] }"#).unwrap();
    let links: Vec<LinkRecord> = artifacts.records("Links").unwrap();
    assert!(links.is_empty());
}

/// Each shape failure maps to its own variant.
#[test]
fn test_shape_errors() {
    let artifacts =
        Artifacts::from_json(r#"{ "Null": null, "Number": 3, "Mixed": [ {}, 7 ] }"#).unwrap();

    assert!(matches!(
        artifacts.records::<LinkRecord>("Absent"),
        Err(InvalidArtifactError::Missing { .. })
    ));
    assert_eq!(
        artifacts.records::<LinkRecord>("Null").unwrap_err(),
        InvalidArtifactError::NotASequence {
            name: "Null".to_string(),
            found: "null".to_string()
        }
    );
    assert!(matches!(
        artifacts.records::<LinkRecord>("Number"),
        Err(InvalidArtifactError::NotASequence { ref found, .. }) if found == "number"
    ));
    assert!(matches!(
        artifacts.records::<LinkRecord>("Mixed"),
        Err(InvalidArtifactError::MalformedRecord { index: 1, .. })
    ));
}

/// A non-object gatherer payload is rejected at parse time.
#[test]
fn test_payload_must_be_object() {
    assert!(Artifacts::from_json("[1, 2, 3]").is_err());
    assert!(Artifacts::from_json("{}").unwrap().is_empty());
}

/// Non-string identifying attributes are kept verbatim but read as absent.
#[test]
fn test_non_string_autoid_kept() {
    let artifacts = Artifacts::from_json(r#"{ "Links": [ { "dataAutoid": 42 } ] }"#).unwrap();
    let links: Vec<LinkRecord> = artifacts.records("Links").unwrap();

    assert_eq!(links[0].identifying_attribute(), None);
    assert_eq!(links[0].data_autoid, Some(json!(42)));
    assert_eq!(
        serde_json::to_value(&links[0]).unwrap(),
        json!({ "dataAutoid": 42 })
    );
}
