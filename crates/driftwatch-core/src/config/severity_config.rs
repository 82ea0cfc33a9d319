//! Severity classification thresholds.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SeverityConfig {
    /// Current percent above baseline at which an alert is HIGH. Default: 30.0.
    pub high_at_percent: Option<f64>,
}

impl SeverityConfig {
    pub fn effective_high_at_percent(&self) -> f64 {
        self.high_at_percent.unwrap_or(30.0)
    }
}
