//! Audit registry errors.

use super::error_code::{self, PagecheckErrorCode};

/// Errors that can occur while registering or looking up audits.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Audit already registered: {id}")]
    DuplicateAudit { id: String },

    #[error("Unknown audit: {id}")]
    UnknownAudit { id: String },
}

impl PagecheckErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        error_code::REGISTRY_ERROR
    }
}
