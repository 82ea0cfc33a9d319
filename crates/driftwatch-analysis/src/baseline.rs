//! Baseline suppliers and the baseline-versus-current summary.
//!
//! `RangeMean` averages a fixed index range (the leading half of the series by
//! default); `TrailingMean` averages the samples just before a scan start.

use std::ops::Range;

use serde::Serialize;

use driftwatch_core::config::BaselineConfig;
use driftwatch_core::constants::SIGNIFICANT_CHANGE_PERCENT;
use driftwatch_core::errors::BaselineError;
use driftwatch_core::models::{percent_above, Series};
use driftwatch_core::traits::BaselineSupplier;

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

fn window_mean(series: &Series, range: Range<usize>) -> Result<f64, BaselineError> {
    let window = series.slice(range.clone());
    mean(window.iter().map(|s| s.value)).ok_or(BaselineError::EmptyWindow {
        start: range.start,
        end: range.end,
        len: series.len(),
    })
}

/// Mean of the samples in a fixed index range.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeMean {
    pub range: Range<usize>,
}

impl RangeMean {
    pub fn new(range: Range<usize>) -> Self {
        Self { range }
    }

    /// Mean of the leading `fraction` of a series of `len` samples.
    pub fn prefix_fraction(len: usize, fraction: f64) -> Result<Self, BaselineError> {
        if !(fraction > 0.0 && fraction < 1.0) {
            return Err(BaselineError::InvalidFraction { fraction });
        }
        let end = (len as f64 * fraction).floor() as usize;
        Ok(Self::new(0..end))
    }
}

impl BaselineSupplier for RangeMean {
    fn name(&self) -> &str {
        "range_mean"
    }

    fn baseline(&self, series: &Series) -> Result<f64, BaselineError> {
        window_mean(series, self.range.clone())
    }
}

/// Mean of the `window` samples immediately preceding `before`.
///
/// With `before` set to the scan start this gives a rolling baseline that
/// tracks recent history instead of a fixed prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingMean {
    pub window: usize,
    pub before: usize,
}

impl TrailingMean {
    pub fn new(window: usize, before: usize) -> Self {
        Self { window, before }
    }
}

impl BaselineSupplier for TrailingMean {
    fn name(&self) -> &str {
        "trailing_mean"
    }

    fn baseline(&self, series: &Series) -> Result<f64, BaselineError> {
        let end = self.before.min(series.len());
        window_mean(series, end.saturating_sub(self.window)..end)
    }
}

/// Build the supplier described by `config` for a series of `len` samples.
pub fn supplier_for(
    config: &BaselineConfig,
    len: usize,
) -> Result<Box<dyn BaselineSupplier>, BaselineError> {
    match config.trailing_window {
        Some(window) => Ok(Box::new(TrailingMean::new(
            window,
            config.effective_scan_start(len),
        ))),
        None => Ok(Box::new(RangeMean::prefix_fraction(
            len,
            config.effective_fraction(),
        )?)),
    }
}

/// How the latest sample compares with the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BaselineSummary {
    pub baseline: f64,
    pub current: f64,
    pub percent_change: f64,
    /// Change is above the "significant" line (20%).
    pub significant: bool,
}

impl BaselineSummary {
    /// Compare the last sample of `series` with `baseline`.
    /// Returns `None` for an empty series.
    pub fn compute(series: &Series, baseline: f64) -> Option<Self> {
        let current = series.last()?.value;
        let percent_change = percent_above(current, baseline);
        Some(Self {
            baseline,
            current,
            percent_change,
            significant: percent_change > SIGNIFICANT_CHANGE_PERCENT,
        })
    }
}
