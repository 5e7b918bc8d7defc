//! # pagecheck-audits
//!
//! Audits over gathered page artifacts.
//! Provides the artifact bundle, the `Audit` capability trait, the audit
//! registry, and the legal-compliance audits.

pub mod artifacts;
pub mod audits;
pub mod registry;
pub mod traits;

pub use artifacts::{Artifacts, LinkRecord};
pub use audits::legal::CookiePreferencesAudit;
pub use registry::AuditRegistry;
pub use traits::{Audit, AuditMeta, AuditResult, LocalizedMeta};
