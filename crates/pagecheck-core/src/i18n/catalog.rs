//! In-memory message catalog.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::message::{MessageId, UiStrings};
use crate::constants::DEFAULT_LOCALE;
use crate::errors::CatalogError;

/// One entry of a locale file: `{ "<id>": { "message": "..." } }`.
#[derive(Debug, Deserialize)]
struct LocaleEntry {
    message: String,
}

/// Maps message ids to text in one locale.
///
/// Registered source strings are the fallback for any id the locale file
/// does not translate.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    locale: String,
    messages: FxHashMap<String, String>,
}

impl MessageCatalog {
    /// Create an empty catalog for `locale`.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            messages: FxHashMap::default(),
        }
    }

    /// The locale this catalog renders.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Register a source string table. Ids already present keep their text,
    /// so translations loaded earlier are not clobbered.
    pub fn register(&mut self, strings: &UiStrings) {
        for (id, message) in strings.iter() {
            self.messages
                .entry(id.to_string())
                .or_insert_with(|| message.to_string());
        }
    }

    /// Overlay translations from a locale JSON file.
    ///
    /// Only ids that are already registered are replaced; anything else in
    /// the file belongs to audits this process does not run. Returns the
    /// number of messages replaced.
    pub fn load_locale_file(&mut self, path: &Path) -> Result<usize, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|_| CatalogError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let entries: FxHashMap<String, LocaleEntry> =
            serde_json::from_str(&content).map_err(|e| CatalogError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let mut loaded = 0;
        for (id, entry) in entries {
            match self.messages.get_mut(&id) {
                Some(text) => {
                    *text = entry.message;
                    loaded += 1;
                }
                None => tracing::debug!(%id, "skipping translation for unregistered message"),
            }
        }
        tracing::debug!(
            catalog_messages_loaded = loaded,
            locale = %self.locale,
            path = %path.display(),
            "locale file loaded"
        );
        Ok(loaded)
    }

    /// Load `<dir>/<locale>.json` if it exists. The default locale needs no
    /// file, and a missing file leaves the source strings in place.
    pub fn load_locale_dir(&mut self, dir: &Path) -> Result<usize, CatalogError> {
        if self.locale == DEFAULT_LOCALE {
            return Ok(0);
        }
        let path = dir.join(format!("{}.json", self.locale));
        if !path.exists() {
            tracing::warn!(
                locale = %self.locale,
                path = %path.display(),
                "no locale file, falling back to source strings"
            );
            return Ok(0);
        }
        self.load_locale_file(&path)
    }

    /// Text for `id` in this catalog's locale.
    pub fn get(&self, id: &MessageId) -> Result<&str, CatalogError> {
        let key = id.to_string();
        self.messages
            .get(&key)
            .map(String::as_str)
            .ok_or(CatalogError::UnknownMessage { id: key })
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}
