//! Synthetic series generation parameters.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Shape of the synthetic latency series: a flat baseline with a midday bump,
/// uniform noise, and a linear upward drift from `drift_start_hour` onward.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneratorConfig {
    /// First timestamp. Default: 2026-01-01T00:00:00.
    pub start: Option<NaiveDateTime>,
    /// Sample spacing. Default: 5 minutes.
    pub interval_minutes: Option<u32>,
    /// Length of the series. Default: 48 hours.
    pub total_hours: Option<u32>,
    /// Healthy level. Default: 180.0.
    pub baseline_value: Option<f64>,
    /// Half-width of the uniform noise band. Default: 10.0.
    pub noise: Option<f64>,
    /// Peak of the daily midday bump. Default: 8.0.
    pub midday_amplitude: Option<f64>,
    /// Hour at which drift begins. Default: 24.0.
    pub drift_start_hour: Option<f64>,
    /// Total relative increase reached 24 hours after drift starts. Default: 0.30.
    pub drift_total_increase: Option<f64>,
    /// RNG seed. Unset means a fresh random series on every run.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub fn effective_start(&self) -> NaiveDateTime {
        self.start.unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(2026, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .unwrap_or_default()
        })
    }

    pub fn effective_interval_minutes(&self) -> u32 {
        self.interval_minutes.unwrap_or(5)
    }

    pub fn effective_total_hours(&self) -> u32 {
        self.total_hours.unwrap_or(48)
    }

    pub fn effective_baseline_value(&self) -> f64 {
        self.baseline_value.unwrap_or(180.0)
    }

    pub fn effective_noise(&self) -> f64 {
        self.noise.unwrap_or(10.0)
    }

    pub fn effective_midday_amplitude(&self) -> f64 {
        self.midday_amplitude.unwrap_or(8.0)
    }

    pub fn effective_drift_start_hour(&self) -> f64 {
        self.drift_start_hour.unwrap_or(24.0)
    }

    pub fn effective_drift_total_increase(&self) -> f64 {
        self.drift_total_increase.unwrap_or(0.30)
    }

    /// Number of samples the generator will emit.
    pub fn effective_total_points(&self) -> usize {
        let interval = self.effective_interval_minutes();
        if interval == 0 {
            return 0;
        }
        (self.effective_total_hours() * 60 / interval) as usize
    }
}
