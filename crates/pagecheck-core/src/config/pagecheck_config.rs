//! Top-level pagecheck configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AuditConfig, I18nConfig};
use crate::constants::{PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`PAGECHECK_*`)
/// 3. Project config (`pagecheck.toml` in project root)
/// 4. User config (`~/.pagecheck/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PagecheckConfig {
    pub i18n: I18nConfig,
    pub audits: AuditConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub locale: Option<String>,
    pub locale_dir: Option<PathBuf>,
    pub disabled_audits: Vec<String>,
}

impl PagecheckConfig {
    /// Load configuration with layered resolution. See the type docs for the
    /// order.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        // Unreadable user config is not fatal; defaults stand.
                        tracing::warn!(error = %e, "ignoring user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &PagecheckConfig) -> Result<(), ConfigError> {
        if let Some(ref locale) = config.i18n.locale {
            let well_formed = !locale.is_empty()
                && !locale.starts_with('-')
                && !locale.ends_with('-')
                && locale.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
            if !well_formed {
                return Err(ConfigError::ValidationFailed {
                    field: "i18n.locale".to_string(),
                    message: format!("'{locale}' is not a locale tag like 'en-US'"),
                });
            }
        }
        for (field, ids) in [
            ("audits.enabled", &config.audits.enabled),
            ("audits.disabled", &config.audits.disabled),
        ] {
            if ids.iter().any(|id| id.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "audit ids must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.pagecheck/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut PagecheckConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: PagecheckConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`. Options override only when `Some`, lists
    /// only when non-empty.
    fn merge(base: &mut PagecheckConfig, other: &PagecheckConfig) {
        if other.i18n.locale.is_some() {
            base.i18n.locale = other.i18n.locale.clone();
        }
        if other.i18n.locale_dir.is_some() {
            base.i18n.locale_dir = other.i18n.locale_dir.clone();
        }

        if !other.audits.enabled.is_empty() {
            base.audits.enabled = other.audits.enabled.clone();
        }
        if !other.audits.disabled.is_empty() {
            base.audits.disabled = other.audits.disabled.clone();
        }
    }

    /// Apply environment variable overrides.
    /// `PAGECHECK_DISABLED_AUDITS` is a comma-separated list.
    fn apply_env_overrides(config: &mut PagecheckConfig) {
        if let Ok(val) = std::env::var("PAGECHECK_LOCALE") {
            config.i18n.locale = Some(val);
        }
        if let Ok(val) = std::env::var("PAGECHECK_LOCALE_DIR") {
            config.i18n.locale_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("PAGECHECK_DISABLED_AUDITS") {
            let ids: Vec<String> = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if !ids.is_empty() {
                config.audits.disabled = ids;
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut PagecheckConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.locale {
            config.i18n.locale = Some(v.clone());
        }
        if let Some(ref v) = cli.locale_dir {
            config.i18n.locale_dir = Some(v.clone());
        }
        if !cli.disabled_audits.is_empty() {
            config.audits.disabled = cli.disabled_audits.clone();
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
