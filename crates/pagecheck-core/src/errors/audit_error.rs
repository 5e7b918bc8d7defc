//! Top-level audit error.

use super::error_code::PagecheckErrorCode;
use super::{CatalogError, ConfigError, InvalidArtifactError, RegistryError};

/// Errors surfaced to the host audit runner.
/// Aggregates subsystem errors via `From` conversions. The host decides how
/// to downgrade a run; nothing here is recovered locally.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("Artifact error: {0}")]
    Artifact(#[from] InvalidArtifactError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

impl PagecheckErrorCode for AuditError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Artifact(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Registry(e) => e.error_code(),
        }
    }
}
