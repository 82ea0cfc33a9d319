//! Baseline window and scan window policy.

use serde::{Deserialize, Serialize};

/// Which samples define "normal" and where scanning begins.
///
/// Default policy: the first half of the series is the baseline and the scan
/// starts right after it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BaselineConfig {
    /// Leading fraction of the series averaged into the baseline. Default: 0.5.
    pub fraction: Option<f64>,
    /// Index where the drift scan starts. Default: end of the baseline window.
    pub scan_start: Option<usize>,
    /// When set, the baseline is the mean of this many samples immediately
    /// before `scan_start` instead of the leading fraction.
    pub trailing_window: Option<usize>,
}

impl BaselineConfig {
    pub fn effective_fraction(&self) -> f64 {
        self.fraction.unwrap_or(0.5)
    }

    /// End (exclusive) of the leading baseline window for a series of `len` samples.
    pub fn baseline_end(&self, len: usize) -> usize {
        (len as f64 * self.effective_fraction()).floor() as usize
    }

    /// Scan start for a series of `len` samples.
    pub fn effective_scan_start(&self, len: usize) -> usize {
        self.scan_start.unwrap_or_else(|| self.baseline_end(len))
    }
}
