//! Severity classification for drift alerts.
//!
//! Kept apart from detection: the detector reports facts, this policy decides
//! how loud the alert should be.

use std::fmt;

use serde::{Deserialize, Serialize};

use driftwatch_core::config::SeverityConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Medium => f.write_str("MEDIUM"),
            Severity::High => f.write_str("HIGH"),
        }
    }
}

/// HIGH once the current level is at least `high_at_percent` above baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityPolicy {
    pub high_at_percent: f64,
}

impl SeverityPolicy {
    pub fn new(high_at_percent: f64) -> Self {
        Self { high_at_percent }
    }

    pub fn from_config(config: &SeverityConfig) -> Self {
        Self::new(config.effective_high_at_percent())
    }

    pub fn classify(&self, current_percent_above: f64) -> Severity {
        if current_percent_above >= self.high_at_percent {
            Severity::High
        } else {
            Severity::Medium
        }
    }
}

impl Default for SeverityPolicy {
    fn default() -> Self {
        Self::from_config(&SeverityConfig::default())
    }
}
