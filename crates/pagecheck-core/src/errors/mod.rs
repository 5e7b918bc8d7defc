//! Error handling for pagecheck.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod artifact_error;
pub mod audit_error;
pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod registry_error;

pub use artifact_error::InvalidArtifactError;
pub use audit_error::AuditError;
pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::PagecheckErrorCode;
pub use registry_error::RegistryError;
