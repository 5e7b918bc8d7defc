//! Message catalog for localized audit strings.
//!
//! Audits declare their English source strings as a static `UiStrings`
//! table keyed by file identity. At start-up the tables are registered into
//! a `MessageCatalog`, optionally overlaid with a locale file, and audit
//! metadata refers to strings by `MessageId` only.

pub mod catalog;
pub mod message;

pub use catalog::MessageCatalog;
pub use message::{MessageId, UiString, UiStrings};
