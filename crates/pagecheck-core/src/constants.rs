//! Workspace-wide constants.

/// Locale used when nothing else is configured. Registered audit strings
/// are authored in this locale.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Project-level config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "pagecheck.toml";

/// User-level config directory name, relative to the home directory.
pub const USER_CONFIG_DIR: &str = ".pagecheck";

/// Environment variable holding the `EnvFilter` directive for logging.
pub const LOG_ENV_VAR: &str = "PAGECHECK_LOG";

/// Filter used when `PAGECHECK_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "pagecheck=info";

/// Separator between file identity and key in a message id.
pub const MESSAGE_ID_SEPARATOR: &str = " | ";
