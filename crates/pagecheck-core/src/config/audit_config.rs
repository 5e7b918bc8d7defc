//! Audit selection configuration.

use serde::{Deserialize, Serialize};

/// Which registered audits take part in a run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// Audits to keep. Empty means every registered audit.
    #[serde(default)]
    pub enabled: Vec<String>,
    /// Audits to drop. Applied after `enabled`.
    #[serde(default)]
    pub disabled: Vec<String>,
}

impl AuditConfig {
    /// Whether the audit with `id` takes part in a run.
    pub fn is_enabled(&self, id: &str) -> bool {
        let selected = self.enabled.is_empty() || self.enabled.iter().any(|e| e == id);
        selected && !self.disabled.iter().any(|d| d == id)
    }
}
