//! Errors from an end-to-end monitor run.

use super::error_code::DriftwatchErrorCode;
use super::{BaselineError, ConfigError, DataError, DetectionError};

/// Errors that abort a monitor run.
/// Aggregates subsystem errors via `From` conversions.
///
/// Notification failures never abort a run; they are recorded as a
/// delivery outcome next to the detection result.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Baseline error: {0}")]
    Baseline(#[from] BaselineError),

    #[error("Detection error: {0}")]
    Detection(#[from] DetectionError),
}

impl DriftwatchErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Data(e) => e.error_code(),
            Self::Baseline(e) => e.error_code(),
            Self::Detection(e) => e.error_code(),
        }
    }
}
