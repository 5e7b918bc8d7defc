//! `CheckLegalLinks` artifact: links found in the page footer's legal area.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Artifact name under which the gatherer publishes legal links.
pub const CHECK_LEGAL_LINKS: &str = "CheckLegalLinks";

/// One link the gatherer found on the page.
///
/// Only `dataAutoid` (the element's `data-autoid` attribute) is read by the
/// audits, and only when it is a string. A non-string value is kept but never
/// matches. Every other attribute is kept as-is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinkRecord {
    #[serde(rename = "dataAutoid", default, skip_serializing_if = "Option::is_none")]
    pub data_autoid: Option<Value>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl LinkRecord {
    /// A record carrying only the identifying attribute.
    pub fn with_autoid(autoid: impl Into<String>) -> Self {
        Self {
            data_autoid: Some(Value::String(autoid.into())),
            attributes: Map::new(),
        }
    }

    /// Value of the identifying attribute, if the element had a string one.
    pub fn identifying_attribute(&self) -> Option<&str> {
        self.data_autoid.as_ref().and_then(Value::as_str)
    }
}
