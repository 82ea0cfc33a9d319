//! Notification delivery errors.

use super::error_code::{self, DriftwatchErrorCode};

/// Errors raised by a notification channel.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NotifyError {
    #[error("Missing environment variables: {}", missing.join(", "))]
    MissingCredentials { missing: Vec<String> },

    #[error("Invalid address '{address}': {message}")]
    InvalidAddress { address: String, message: String },

    #[error("Failed to build message: {0}")]
    Message(String),

    #[error("Delivery via {channel} failed: {message}")]
    Delivery { channel: String, message: String },
}

impl DriftwatchErrorCode for NotifyError {
    fn error_code(&self) -> &'static str {
        error_code::NOTIFY_ERROR
    }
}
