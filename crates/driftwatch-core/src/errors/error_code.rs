//! Structured error codes shared by every driftwatch error enum.

/// Trait giving each error a stable, machine-readable code.
/// Every error enum implements this so the CLI and JSON output can report
/// failures without matching on display strings.
pub trait DriftwatchErrorCode {
    /// Returns the error code string (e.g., "DETECTION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const DETECTION_ERROR: &str = "DETECTION_ERROR";
pub const BASELINE_ERROR: &str = "BASELINE_ERROR";
pub const DATA_ERROR: &str = "DATA_ERROR";
pub const NOTIFY_ERROR: &str = "NOTIFY_ERROR";
