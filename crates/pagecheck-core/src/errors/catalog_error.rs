//! Message catalog errors.

use super::error_code::{self, PagecheckErrorCode};

/// Errors that can occur while loading or querying the message catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Locale file not found: {path}")]
    FileNotFound { path: String },

    #[error("Locale file parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Unknown message id: {id}")]
    UnknownMessage { id: String },
}

impl PagecheckErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
