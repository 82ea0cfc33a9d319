//! # driftwatch-core
//!
//! Foundation crate for the driftwatch latency drift detector.
//! Defines the series and event types, error enums, layered configuration,
//! collaborator traits, tracing setup, and constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

pub use config::DriftwatchConfig;
pub use errors::{DetectionError, DriftwatchErrorCode, PipelineError};
pub use models::{DriftEvent, Sample, Series};
pub use traits::{BaselineSupplier, Notifier};
