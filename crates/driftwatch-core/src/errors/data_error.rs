//! Series data loading and writing errors.

use super::error_code::{self, DriftwatchErrorCode};

/// Errors from reading or writing series files.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("CSV error in {path}: {message}")]
    Csv { path: String, message: String },

    #[error("Missing column '{column}' in {path}")]
    MissingColumn { path: String, column: String },

    #[error("Invalid value '{raw}' at row {row} in {path}")]
    InvalidValue { path: String, row: usize, raw: String },

    #[error("Invalid timestamp '{raw}' at row {row} in {path}")]
    InvalidTimestamp { path: String, row: usize, raw: String },

    #[error("Timestamps out of order at row {row} in {path}")]
    OutOfOrder { path: String, row: usize },

    #[error("No data found in {path}")]
    Empty { path: String },
}

impl DriftwatchErrorCode for DataError {
    fn error_code(&self) -> &'static str {
        error_code::DATA_ERROR
    }
}
