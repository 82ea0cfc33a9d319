//! Email notification settings.
//!
//! Credentials are never read from config files; `SMTP_USER`, `SMTP_PASS` and
//! `EMAIL_TO` come from the environment at send time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NotifyConfig {
    /// Send an email when drift is detected. Default: false.
    pub enabled: Option<bool>,
    /// SMTP relay host. Default: `smtp.gmail.com`.
    pub smtp_host: Option<String>,
    /// SMTP submission port (STARTTLS). Default: 587.
    pub smtp_port: Option<u16>,
}

impl NotifyConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    pub fn effective_smtp_host(&self) -> String {
        self.smtp_host
            .clone()
            .unwrap_or_else(|| "smtp.gmail.com".to_string())
    }

    pub fn effective_smtp_port(&self) -> u16 {
        self.smtp_port.unwrap_or(587)
    }
}
