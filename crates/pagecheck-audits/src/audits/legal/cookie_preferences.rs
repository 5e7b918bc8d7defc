//! Cookie Preferences audit: is the Cookie Preferences link in the footer?

use smallvec::smallvec;

use pagecheck_core::errors::InvalidArtifactError;
use pagecheck_core::i18n::{UiString, UiStrings};

use crate::artifacts::{Artifacts, LinkRecord, CHECK_LEGAL_LINKS};
use crate::traits::{Audit, AuditMeta, AuditResult};

/// `data-autoid` value that `ibm-common.js` stamps on the Cookie Preferences
/// link it injects. Must match the script's output exactly.
pub const COOKIE_PREFERENCES_MARKER: &str = "dds--privacy-cp";

pub const AUDIT_ID: &str = "cookie-preferences-audit";

pub static UI_STRINGS: UiStrings = UiStrings {
    file: "audits/legal/cookie_preferences",
    entries: &[
        UiString {
            key: "title",
            message: "The Cookie Preferences link is included on the page.",
        },
        UiString {
            key: "failureTitle",
            message: "The Cookie Preferences link is missing.",
        },
        UiString {
            key: "description",
            message: "The Cookie Preferences link is automatically included as part of \
                      `ibm-common.js`. You must include `ibm-common.js` in the page to ensure \
                      that the Cookie Preferences link is present.",
        },
    ],
};

/// Passes when the `CheckLegalLinks` artifact holds a link marked with
/// `COOKIE_PREFERENCES_MARKER`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CookiePreferencesAudit;

impl CookiePreferencesAudit {
    /// Score a list of links. Order and duplicates do not matter.
    pub fn evaluate(records: &[LinkRecord]) -> AuditResult {
        let present = records
            .iter()
            .any(|link| link.identifying_attribute() == Some(COOKIE_PREFERENCES_MARKER));
        AuditResult::binary(present)
    }
}

impl Audit for CookiePreferencesAudit {
    fn meta(&self) -> AuditMeta {
        AuditMeta {
            id: AUDIT_ID,
            title: UI_STRINGS.id("title"),
            failure_title: UI_STRINGS.id("failureTitle"),
            description: UI_STRINGS.id("description"),
            required_artifacts: smallvec![CHECK_LEGAL_LINKS],
        }
    }

    fn ui_strings(&self) -> &'static UiStrings {
        &UI_STRINGS
    }

    fn audit(&self, artifacts: &Artifacts) -> Result<AuditResult, InvalidArtifactError> {
        let links: Vec<LinkRecord> = artifacts.records(CHECK_LEGAL_LINKS)?;
        let result = Self::evaluate(&links);
        tracing::debug!(
            audit_id = AUDIT_ID,
            artifact_record_count = links.len(),
            present = result.raw_value,
            "cookie preferences link checked"
        );
        Ok(result)
    }
}
