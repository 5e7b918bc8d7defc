//! Audit registry: explicit registration and dispatch by id.

use std::time::Instant;

use rustc_hash::FxHashMap;

use pagecheck_core::config::{AuditConfig, I18nConfig};
use pagecheck_core::errors::{AuditError, CatalogError, InvalidArtifactError, RegistryError};
use pagecheck_core::i18n::MessageCatalog;

use crate::artifacts::Artifacts;
use crate::audits::legal::CookiePreferencesAudit;
use crate::traits::{Audit, AuditResult, LocalizedMeta};

/// Holds the audits the host runs, in registration order.
pub struct AuditRegistry {
    audits: Vec<Box<dyn Audit>>,
    index: FxHashMap<&'static str, usize>,
}

impl AuditRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            audits: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// A registry holding every built-in audit.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let defaults: Vec<Box<dyn Audit>> = vec![Box::new(CookiePreferencesAudit)];
        for audit in defaults {
            registry
                .register(audit)
                .expect("built-in audit ids are unique");
        }
        registry
    }

    /// Add an audit. Ids must be unique.
    pub fn register(&mut self, audit: Box<dyn Audit>) -> Result<(), RegistryError> {
        let id = audit.meta().id;
        if self.index.contains_key(id) {
            return Err(RegistryError::DuplicateAudit { id: id.to_string() });
        }
        self.index.insert(id, self.audits.len());
        self.audits.push(audit);
        tracing::debug!(audit_id = id, "audit registered");
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&dyn Audit> {
        self.index.get(id).map(|&i| self.audits[i].as_ref())
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.audits.iter().map(|a| a.meta().id).collect()
    }

    pub fn len(&self) -> usize {
        self.audits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.audits.is_empty()
    }

    /// Drop the audits `config` does not select.
    pub fn apply_config(&mut self, config: &AuditConfig) {
        self.audits.retain(|a| config.is_enabled(a.meta().id));
        self.index = self
            .audits
            .iter()
            .enumerate()
            .map(|(i, a)| (a.meta().id, i))
            .collect();
    }

    /// Register every audit's source strings into `catalog`.
    pub fn populate_catalog(&self, catalog: &mut MessageCatalog) {
        for audit in &self.audits {
            catalog.register(audit.ui_strings());
        }
    }

    /// Build a catalog for the configured locale holding every registered
    /// audit's strings, with the locale file overlaid when one is configured.
    pub fn build_catalog(&self, config: &I18nConfig) -> Result<MessageCatalog, CatalogError> {
        let mut catalog = MessageCatalog::new(config.effective_locale());
        self.populate_catalog(&mut catalog);
        if let Some(ref dir) = config.locale_dir {
            catalog.load_locale_dir(dir)?;
        }
        Ok(catalog)
    }

    /// Run the audit `id` against `artifacts`.
    ///
    /// Required artifacts are checked before dispatch. Errors are returned to
    /// the caller untouched.
    pub fn run(&self, id: &str, artifacts: &Artifacts) -> Result<AuditResult, AuditError> {
        let audit = self
            .get(id)
            .ok_or_else(|| RegistryError::UnknownAudit { id: id.to_string() })?;
        let meta = audit.meta();

        if let Some(missing) = meta
            .required_artifacts
            .iter()
            .find(|name| !artifacts.contains(name))
        {
            tracing::warn!(audit_id = meta.id, artifact = %missing, "required artifact missing");
            return Err(InvalidArtifactError::Missing {
                name: missing.to_string(),
            }
            .into());
        }

        let start = Instant::now();
        let outcome = audit.audit(artifacts);
        let elapsed_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);

        match outcome {
            Ok(result) => {
                tracing::debug!(
                    audit_id = meta.id,
                    audit_evaluation_time_us = elapsed_us,
                    score = result.score,
                    "audit finished"
                );
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(audit_id = meta.id, error = %e, "audit failed");
                Err(e.into())
            }
        }
    }

    /// Metadata for `id` with display strings resolved in `catalog`.
    pub fn describe(&self, id: &str, catalog: &MessageCatalog) -> Result<LocalizedMeta, AuditError> {
        let audit = self
            .get(id)
            .ok_or_else(|| RegistryError::UnknownAudit { id: id.to_string() })?;
        Ok(audit.meta().localize(catalog)?)
    }
}

impl Default for AuditRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
