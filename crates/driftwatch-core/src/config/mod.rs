//! Configuration system for driftwatch.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod baseline_config;
pub mod data_config;
pub mod detection_config;
pub mod driftwatch_config;
pub mod generator_config;
pub mod notify_config;
pub mod severity_config;

pub use baseline_config::BaselineConfig;
pub use data_config::DataConfig;
pub use detection_config::DetectionConfig;
pub use driftwatch_config::{CliOverrides, DriftwatchConfig};
pub use generator_config::GeneratorConfig;
pub use notify_config::NotifyConfig;
pub use severity_config::SeverityConfig;
