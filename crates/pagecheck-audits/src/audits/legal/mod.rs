//! Legal-compliance audits over the page footer.

pub mod cookie_preferences;

pub use cookie_preferences::{CookiePreferencesAudit, COOKIE_PREFERENCES_MARKER};
