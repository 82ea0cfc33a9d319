//! Error handling for driftwatch.
//! One error enum per subsystem, `thiserror` only.

pub mod baseline_error;
pub mod config_error;
pub mod data_error;
pub mod detection_error;
pub mod error_code;
pub mod notify_error;
pub mod pipeline_error;

pub use baseline_error::BaselineError;
pub use config_error::ConfigError;
pub use data_error::DataError;
pub use detection_error::DetectionError;
pub use error_code::DriftwatchErrorCode;
pub use notify_error::NotifyError;
pub use pipeline_error::PipelineError;
