//! Synthetic latency series for demos and tests.
//!
//! Shape, per sample at `hour` since start:
//!
//! ```text
//! level   = baseline + amplitude × (1 − |day_fraction − 0.5| × 2)
//! level  ×= 1 + increase × (hour − drift_start) / 24     (hour ≥ drift_start)
//! value   = max(1.0, level + U(−noise, noise)), rounded to 2 decimals
//! ```

use chrono::{Duration, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use driftwatch_core::config::GeneratorConfig;
use driftwatch_core::models::{Sample, Series};

/// Floor applied to every generated value.
const MIN_VALUE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticGenerator {
    pub start: NaiveDateTime,
    pub interval_minutes: u32,
    pub total_points: usize,
    pub baseline_value: f64,
    pub noise: f64,
    pub midday_amplitude: f64,
    pub drift_start_hour: f64,
    pub drift_total_increase: f64,
    pub seed: Option<u64>,
}

impl SyntheticGenerator {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            start: config.effective_start(),
            interval_minutes: config.effective_interval_minutes(),
            total_points: config.effective_total_points(),
            baseline_value: config.effective_baseline_value(),
            noise: config.effective_noise(),
            midday_amplitude: config.effective_midday_amplitude(),
            drift_start_hour: config.effective_drift_start_hour(),
            drift_total_increase: config.effective_drift_total_increase(),
            seed: config.seed,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Noise-free level at `hour` hours since start.
    pub fn level_at(&self, hour: f64) -> f64 {
        let day_fraction = (hour % 24.0) / 24.0;
        let midday_bump = self.midday_amplitude * (1.0 - (day_fraction - 0.5).abs() * 2.0);
        let mut level = self.baseline_value + midday_bump;

        if hour >= self.drift_start_hour {
            let progress = (hour - self.drift_start_hour) / 24.0;
            level *= 1.0 + self.drift_total_increase * progress;
        }
        level
    }

    pub fn generate(&self) -> Series {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let samples = (0..self.total_points)
            .map(|i| {
                let minutes = i as i64 * i64::from(self.interval_minutes);
                let hour = minutes as f64 / 60.0;
                let jitter = if self.noise > 0.0 {
                    rng.gen_range(-self.noise..=self.noise)
                } else {
                    0.0
                };
                let value = (self.level_at(hour) + jitter).max(MIN_VALUE);
                Sample::new(self.start + Duration::minutes(minutes), round2(value))
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            points = samples.len(),
            seed = ?self.seed,
            "generated synthetic series"
        );
        Series::new(samples)
    }
}

impl Default for SyntheticGenerator {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
