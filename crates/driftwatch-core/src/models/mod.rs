//! Series and detection result types.

pub mod drift_event;
pub mod sample;
pub mod series;

pub use drift_event::DriftEvent;
pub use sample::Sample;
pub use series::Series;

/// Relative excess of `value` over `baseline`, as a fraction (0.25 = +25%).
///
/// Callers guarantee `baseline` is non-zero.
pub fn fraction_above(value: f64, baseline: f64) -> f64 {
    (value - baseline) / baseline
}

/// Relative excess of `value` over `baseline`, in percent.
pub fn percent_above(value: f64, baseline: f64) -> f64 {
    fraction_above(value, baseline) * 100.0
}
