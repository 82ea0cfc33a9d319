//! Detection errors.

use super::error_code::{self, DriftwatchErrorCode};

/// Invalid input to the drift detector. Finding no drift is not an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DetectionError {
    #[error("Series is empty")]
    EmptySeries,

    #[error("Baseline must be positive and finite, got {baseline}")]
    InvalidBaseline { baseline: f64 },

    #[error("Threshold fraction must be finite, got {threshold}")]
    InvalidThreshold { threshold: f64 },

    #[error("Sustain window must be at least one sample")]
    InvalidSustainWindow,
}

impl DriftwatchErrorCode for DetectionError {
    fn error_code(&self) -> &'static str {
        error_code::DETECTION_ERROR
    }
}
