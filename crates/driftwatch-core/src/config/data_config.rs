//! Input data configuration.

use serde::{Deserialize, Serialize};

/// Where the series lives and what it measures.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataConfig {
    /// Series CSV path. Default: `latency_metrics.csv`.
    pub path: Option<String>,
    /// Metric column name. Default: `p95_latency_ms`.
    pub metric: Option<String>,
    /// Display unit for metric values. Default: `ms`.
    pub unit: Option<String>,
}

impl DataConfig {
    pub fn effective_path(&self) -> String {
        self.path
            .clone()
            .unwrap_or_else(|| "latency_metrics.csv".to_string())
    }

    pub fn effective_metric(&self) -> String {
        self.metric
            .clone()
            .unwrap_or_else(|| "p95_latency_ms".to_string())
    }

    pub fn effective_unit(&self) -> String {
        self.unit.clone().unwrap_or_else(|| "ms".to_string())
    }
}
