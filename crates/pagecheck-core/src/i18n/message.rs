//! Stable message keys and source string tables.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::constants::MESSAGE_ID_SEPARATOR;

/// One English source string declared by an audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiString {
    pub key: &'static str,
    pub message: &'static str,
}

/// The string table for one source file.
///
/// `file` is the stable identity of the declaring module (e.g.
/// `audits/legal/cookie_preferences`). It namespaces the keys so two audits
/// may both declare a `title`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiStrings {
    pub file: &'static str,
    pub entries: &'static [UiString],
}

impl UiStrings {
    /// Message id for `key` in this table.
    pub const fn id(&self, key: &'static str) -> MessageId {
        MessageId {
            file: self.file,
            key,
        }
    }

    /// English source text for `key`, if declared.
    pub fn source(&self, key: &str) -> Option<&'static str> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.message)
    }

    /// Iterate over `(id, message)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (MessageId, &'static str)> + '_ {
        self.entries.iter().map(|e| (self.id(e.key), e.message))
    }
}

/// Stable key of a localizable string: file identity plus table key.
/// Renders as `"<file> | <key>"`, which is also its catalog key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId {
    pub file: &'static str,
    pub key: &'static str,
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.file, MESSAGE_ID_SEPARATOR, self.key)
    }
}

impl Serialize for MessageId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
