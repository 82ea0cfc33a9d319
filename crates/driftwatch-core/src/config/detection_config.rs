//! Sustained-threshold detection rule.

use serde::{Deserialize, Serialize};

/// The drift rule: how far above baseline, for how long.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DetectionConfig {
    /// Relative excess over baseline that counts as elevated. Default: 0.20.
    pub threshold_fraction: Option<f64>,
    /// How long the excess must last. Default: 60 minutes.
    pub sustain_minutes: Option<u32>,
    /// Spacing of samples in the series. Default: 5 minutes.
    pub interval_minutes: Option<u32>,
}

impl DetectionConfig {
    pub fn effective_threshold_fraction(&self) -> f64 {
        self.threshold_fraction.unwrap_or(0.20)
    }

    pub fn effective_sustain_minutes(&self) -> u32 {
        self.sustain_minutes.unwrap_or(60)
    }

    pub fn effective_interval_minutes(&self) -> u32 {
        self.interval_minutes.unwrap_or(5)
    }

    /// Sustain window in samples: `sustain_minutes / interval_minutes`, rounded down.
    /// A zero interval yields zero, which validation rejects.
    pub fn effective_sustain_samples(&self) -> usize {
        let interval = self.effective_interval_minutes();
        if interval == 0 {
            return 0;
        }
        (self.effective_sustain_minutes() / interval) as usize
    }

    /// Duration actually covered by the sustain window.
    pub fn effective_sustain_duration_minutes(&self) -> u32 {
        self.effective_sustain_samples() as u32 * self.effective_interval_minutes()
    }
}
