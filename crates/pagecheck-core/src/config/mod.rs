//! Configuration system for pagecheck.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod audit_config;
pub mod i18n_config;
pub mod pagecheck_config;

pub use audit_config::AuditConfig;
pub use i18n_config::I18nConfig;
pub use pagecheck_config::{CliOverrides, PagecheckConfig};
