//! Artifact errors.

use super::error_code::{self, PagecheckErrorCode};

/// Raised when a required artifact is missing or does not have the shape an
/// audit expects. The host guarantees well-formed artifacts, so any of these
/// means the gatherer and the audit disagree on the contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArtifactError {
    #[error("Required artifact missing: {name}")]
    Missing { name: String },

    #[error("Artifact {name} is not a sequence (found {found})")]
    NotASequence { name: String, found: String },

    #[error("Artifact {name} has a malformed record at index {index}: {message}")]
    MalformedRecord {
        name: String,
        index: usize,
        message: String,
    },
}

impl InvalidArtifactError {
    /// Name of the artifact the error refers to.
    pub fn artifact_name(&self) -> &str {
        match self {
            Self::Missing { name }
            | Self::NotASequence { name, .. }
            | Self::MalformedRecord { name, .. } => name,
        }
    }
}

impl PagecheckErrorCode for InvalidArtifactError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_ARTIFACT
    }
}
