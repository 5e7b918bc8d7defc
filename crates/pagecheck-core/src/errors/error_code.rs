//! PagecheckErrorCode trait for host bridges.

/// Every error enum implements this to provide a structured error code
/// string for the host audit runner.
pub trait PagecheckErrorCode {
    /// Returns the error code string (e.g., "INVALID_ARTIFACT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted host string: `[ERROR_CODE] message`.
    fn host_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the host boundary.
pub const INVALID_ARTIFACT: &str = "INVALID_ARTIFACT";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REGISTRY_ERROR: &str = "REGISTRY_ERROR";
