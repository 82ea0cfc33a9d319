//! Baseline computation errors.

use super::error_code::{self, DriftwatchErrorCode};

/// Errors raised by a baseline supplier.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BaselineError {
    #[error("Baseline window {start}..{end} is empty or outside a series of {len} samples")]
    EmptyWindow { start: usize, end: usize, len: usize },

    #[error("Baseline fraction must be in (0, 1), got {fraction}")]
    InvalidFraction { fraction: f64 },
}

impl DriftwatchErrorCode for BaselineError {
    fn error_code(&self) -> &'static str {
        error_code::BASELINE_ERROR
    }
}
