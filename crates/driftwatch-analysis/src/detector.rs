//! Sustained-threshold drift detection.
//!
//! Scans a series from `start_index` and reports the earliest run of
//! `min_consecutive_samples` samples at or above
//! `baseline * (1 + threshold_fraction)`. One sample below the threshold resets
//! the run; equality with the threshold qualifies.

use driftwatch_core::errors::DetectionError;
use driftwatch_core::models::{percent_above, DriftEvent, Series};

/// Detection rule: how far above baseline, for how many samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftDetector {
    pub threshold_fraction: f64,
    pub min_consecutive_samples: usize,
}

impl DriftDetector {
    pub fn new(threshold_fraction: f64, min_consecutive_samples: usize) -> Self {
        Self {
            threshold_fraction,
            min_consecutive_samples,
        }
    }

    pub fn detect(
        &self,
        series: &Series,
        baseline: f64,
        start_index: usize,
    ) -> Result<Option<DriftEvent>, DetectionError> {
        detect(
            series,
            baseline,
            self.threshold_fraction,
            self.min_consecutive_samples,
            start_index,
        )
    }
}

/// Find the first sustained excursion of `series` above `baseline`.
///
/// Returns `Ok(None)` when no run reaches `min_consecutive_samples`, including
/// when `start_index` is at or past the end of the series. The returned event's
/// trigger is the first sample of the qualifying run; its "latest" fields
/// describe the last sample of the series.
pub fn detect(
    series: &Series,
    baseline: f64,
    threshold_fraction: f64,
    min_consecutive_samples: usize,
    start_index: usize,
) -> Result<Option<DriftEvent>, DetectionError> {
    if series.is_empty() {
        return Err(DetectionError::EmptySeries);
    }
    if !baseline.is_finite() || baseline <= 0.0 {
        return Err(DetectionError::InvalidBaseline { baseline });
    }
    if !threshold_fraction.is_finite() {
        return Err(DetectionError::InvalidThreshold {
            threshold: threshold_fraction,
        });
    }
    if min_consecutive_samples == 0 {
        return Err(DetectionError::InvalidSustainWindow);
    }

    // Compare against the absolute line so a sample exactly on it qualifies
    // regardless of rounding in (value - baseline) / baseline.
    let line = baseline * (1.0 + threshold_fraction);
    let mut consecutive = 0usize;
    let mut trigger_index = None;

    for (i, sample) in series.iter().enumerate().skip(start_index) {
        if sample.value >= line {
            consecutive += 1;
        } else {
            consecutive = 0;
        }

        if consecutive == min_consecutive_samples {
            trigger_index = Some(i + 1 - min_consecutive_samples);
            break;
        }
    }

    let Some(trigger_index) = trigger_index else {
        tracing::debug!(
            baseline,
            threshold_fraction,
            min_consecutive_samples,
            start_index,
            len = series.len(),
            "no sustained drift"
        );
        return Ok(None);
    };

    // Both lookups are in bounds: trigger_index < len and the series is non-empty.
    let trigger = series.samples()[trigger_index];
    let latest_index = series.len() - 1;
    let latest = series.samples()[latest_index];

    tracing::info!(
        trigger_index,
        trigger_value = trigger.value,
        baseline,
        "sustained drift detected"
    );

    Ok(Some(DriftEvent {
        trigger_index,
        trigger_timestamp: trigger.timestamp,
        trigger_value: trigger.value,
        trigger_percent_above: percent_above(trigger.value, baseline),
        latest_index,
        latest_timestamp: latest.timestamp,
        latest_value: latest.value,
        latest_percent_above: percent_above(latest.value, baseline),
        baseline,
        sustain_samples: min_consecutive_samples,
    }))
}
