//! Artifacts: data gathered about a page before any audit runs.
//!
//! The gatherer hands over a JSON object keyed by artifact name. Audits pull
//! the artifacts they declared and deserialize them into typed records.

pub mod legal_links;

pub use legal_links::{LinkRecord, CHECK_LEGAL_LINKS};

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use pagecheck_core::errors::InvalidArtifactError;

/// Named artifacts for one page, as produced by the gatherer.
#[derive(Debug, Clone, Default)]
pub struct Artifacts {
    entries: FxHashMap<String, Value>,
}

impl Artifacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a gatherer payload: a JSON object of artifact name to value.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Add or replace one artifact.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> &mut Self {
        self.entries.insert(name.into(), value);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deserialize the sequence artifact `name` into typed records.
    ///
    /// Fails if the artifact is absent, is not a JSON array, or holds an
    /// entry that does not deserialize as `T`.
    pub fn records<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>, InvalidArtifactError> {
        let value = self.get(name).ok_or_else(|| InvalidArtifactError::Missing {
            name: name.to_string(),
        })?;
        let items = value
            .as_array()
            .ok_or_else(|| InvalidArtifactError::NotASequence {
                name: name.to_string(),
                found: json_type_name(value).to_string(),
            })?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                T::deserialize(item).map_err(|e| InvalidArtifactError::MalformedRecord {
                    name: name.to_string(),
                    index,
                    message: e.to_string(),
                })
            })
            .collect()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_type_names() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!({"a": 1})), "object");
        assert_eq!(json_type_name(&json!("s")), "string");
    }

    #[test]
    fn insert_chains() {
        let mut artifacts = Artifacts::new();
        artifacts.insert("A", json!([])).insert("B", json!(1));
        assert_eq!(artifacts.len(), 2);
        assert!(artifacts.contains("B"));
    }
}
