//! # driftwatch-analysis
//!
//! Sustained-drift detection over a latency series, plus the collaborators
//! around it: baseline suppliers, severity policy, alert construction,
//! synthetic data generation, and the end-to-end monitor run.

pub mod alert;
pub mod baseline;
pub mod detector;
pub mod monitor;
pub mod severity;
pub mod synthetic;

pub use alert::Alert;
pub use baseline::{BaselineSummary, RangeMean, TrailingMean};
pub use detector::{detect, DriftDetector};
pub use monitor::{DeliveryOutcome, Monitor, MonitorReport};
pub use severity::{Severity, SeverityPolicy};
pub use synthetic::SyntheticGenerator;
