//! The record produced when a sustained drift window is found.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Sample, Series};

/// First sustained excursion of a series above its baseline, plus the latest
/// sample for "current status" reporting.
///
/// Percent fields are in percent units (25.0 = 25% above baseline).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftEvent {
    pub trigger_index: usize,
    pub trigger_timestamp: NaiveDateTime,
    pub trigger_value: f64,
    pub trigger_percent_above: f64,
    pub latest_index: usize,
    pub latest_timestamp: NaiveDateTime,
    pub latest_value: f64,
    pub latest_percent_above: f64,
    pub baseline: f64,
    /// Length of the qualifying run, in samples.
    pub sustain_samples: usize,
}

impl DriftEvent {
    /// Index of the sample that completed the qualifying run.
    pub fn window_end_index(&self) -> usize {
        self.trigger_index + self.sustain_samples - 1
    }

    /// The qualifying run itself.
    pub fn trigger_window<'a>(&self, series: &'a Series) -> &'a [Sample] {
        series.slice(self.trigger_index..self.window_end_index() + 1)
    }
}
