//! Localization configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOCALE;

/// Configuration for the message catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale used to render audit titles and descriptions. Default: "en-US".
    pub locale: Option<String>,
    /// Directory holding `<locale>.json` message files.
    pub locale_dir: Option<PathBuf>,
}

impl I18nConfig {
    /// Returns the effective locale, defaulting to "en-US".
    pub fn effective_locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }
}
