//! The `Audit` capability trait and the types it exchanges with the host.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use pagecheck_core::errors::{CatalogError, InvalidArtifactError};
use pagecheck_core::i18n::{MessageCatalog, MessageId, UiStrings};

use crate::artifacts::Artifacts;

/// A single named check over a page's gathered artifacts.
///
/// Audits are stateless. The host registers them explicitly in an
/// `AuditRegistry` and may call them from any thread.
pub trait Audit: Send + Sync {
    /// Static description of the audit.
    fn meta(&self) -> AuditMeta;

    /// Source strings the metadata refers to.
    fn ui_strings(&self) -> &'static UiStrings;

    /// Score the page. Fails only when a required artifact is missing or
    /// malformed.
    fn audit(&self, artifacts: &Artifacts) -> Result<AuditResult, InvalidArtifactError>;
}

/// Declarative audit metadata consumed by the host's report renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditMeta {
    /// Stable machine-readable name.
    pub id: &'static str,
    /// Shown when the audit passes.
    pub title: MessageId,
    /// Shown when the audit fails.
    pub failure_title: MessageId,
    pub description: MessageId,
    /// Artifact names the audit reads.
    pub required_artifacts: SmallVec<[&'static str; 1]>,
}

impl AuditMeta {
    /// Resolve every message id against `catalog`.
    pub fn localize(&self, catalog: &MessageCatalog) -> Result<LocalizedMeta, CatalogError> {
        Ok(LocalizedMeta {
            id: self.id.to_string(),
            title: catalog.get(&self.title)?.to_string(),
            failure_title: catalog.get(&self.failure_title)?.to_string(),
            description: catalog.get(&self.description)?.to_string(),
            required_artifacts: self.required_artifacts.iter().map(|a| a.to_string()).collect(),
        })
    }
}

/// `AuditMeta` with display strings resolved in one locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedMeta {
    pub id: String,
    pub title: String,
    pub failure_title: String,
    pub description: String,
    pub required_artifacts: Vec<String>,
}

impl LocalizedMeta {
    /// The title matching the outcome: `title` on pass, `failure_title` otherwise.
    pub fn title_for(&self, result: &AuditResult) -> &str {
        if result.passed() {
            &self.title
        } else {
            &self.failure_title
        }
    }
}

/// Outcome of one audit invocation.
///
/// `raw_value` stays a boolean: report renderers test its truthiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub raw_value: bool,
    /// 1 on pass, 0 on fail. There is no partial credit.
    pub score: u8,
}

impl AuditResult {
    /// Binary scoring: score follows the presence flag.
    pub fn binary(present: bool) -> Self {
        Self {
            raw_value: present,
            score: u8::from(present),
        }
    }

    pub fn passed(&self) -> bool {
        self.score == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_scoring() {
        assert_eq!(AuditResult::binary(true), AuditResult { raw_value: true, score: 1 });
        assert_eq!(AuditResult::binary(false), AuditResult { raw_value: false, score: 0 });
        assert!(AuditResult::binary(true).passed());
        assert!(!AuditResult::binary(false).passed());
    }
}
