//! # pagecheck-core
//!
//! Foundation crate for the pagecheck audit engine.
//! Defines errors, config, tracing setup, the message catalog, and constants.
//! `pagecheck-audits` depends on this for everything that is not an audit.

pub mod config;
pub mod constants;
pub mod errors;
pub mod i18n;
pub mod tracing;

pub use config::PagecheckConfig;
pub use errors::{AuditError, PagecheckErrorCode};
pub use i18n::{MessageCatalog, MessageId, UiString, UiStrings};
