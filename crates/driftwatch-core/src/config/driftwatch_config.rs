//! Top-level driftwatch configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{
    BaselineConfig, DataConfig, DetectionConfig, GeneratorConfig, NotifyConfig, SeverityConfig,
};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`DRIFTWATCH_*`)
/// 3. Project config (`driftwatch.toml` in the project root)
/// 4. User config (`~/.driftwatch/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DriftwatchConfig {
    pub data: DataConfig,
    pub detection: DetectionConfig,
    pub baseline: BaselineConfig,
    pub severity: SeverityConfig,
    pub generator: GeneratorConfig,
    pub notify: NotifyConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data_path: Option<String>,
    pub metric: Option<String>,
    pub threshold_fraction: Option<f64>,
    pub sustain_minutes: Option<u32>,
    pub interval_minutes: Option<u32>,
    pub scan_start: Option<usize>,
    pub notify: Option<bool>,
    pub seed: Option<u64>,
}

impl DriftwatchConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(path = %user_config_path.display(), error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &DriftwatchConfig) -> Result<(), ConfigError> {
        let threshold = config.detection.effective_threshold_fraction();
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(invalid(
                "detection.threshold_fraction",
                "must be a finite, non-negative fraction",
            ));
        }
        if config.detection.effective_interval_minutes() == 0 {
            return Err(invalid("detection.interval_minutes", "must be greater than 0"));
        }
        if config.detection.effective_sustain_samples() == 0 {
            return Err(invalid(
                "detection.sustain_minutes",
                "must cover at least one sample interval",
            ));
        }

        let fraction = config.baseline.effective_fraction();
        if !(fraction > 0.0 && fraction < 1.0) {
            return Err(invalid("baseline.fraction", "must be between 0.0 and 1.0 (exclusive)"));
        }
        if config.baseline.trailing_window == Some(0) {
            return Err(invalid("baseline.trailing_window", "must be greater than 0"));
        }

        let high = config.severity.effective_high_at_percent();
        if !high.is_finite() {
            return Err(invalid("severity.high_at_percent", "must be finite"));
        }

        let generator = &config.generator;
        for (field, value) in [
            ("generator.baseline_value", generator.effective_baseline_value()),
            ("generator.noise", generator.effective_noise()),
            ("generator.midday_amplitude", generator.effective_midday_amplitude()),
            ("generator.drift_start_hour", generator.effective_drift_start_hour()),
            ("generator.drift_total_increase", generator.effective_drift_total_increase()),
        ] {
            if !value.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
        }
        if config.generator.effective_interval_minutes() == 0 {
            return Err(invalid("generator.interval_minutes", "must be greater than 0"));
        }
        if config.generator.effective_noise() < 0.0 {
            return Err(invalid("generator.noise", "must not be negative"));
        }
        if config.generator.effective_baseline_value() <= 0.0 {
            return Err(invalid("generator.baseline_value", "must be greater than 0"));
        }
        Ok(())
    }

    /// Returns the user config path: `~/.driftwatch/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".driftwatch").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut DriftwatchConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: DriftwatchConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut DriftwatchConfig, other: &DriftwatchConfig) {
        // Data
        merge_opt(&mut base.data.path, &other.data.path);
        merge_opt(&mut base.data.metric, &other.data.metric);
        merge_opt(&mut base.data.unit, &other.data.unit);

        // Detection
        merge_opt(&mut base.detection.threshold_fraction, &other.detection.threshold_fraction);
        merge_opt(&mut base.detection.sustain_minutes, &other.detection.sustain_minutes);
        merge_opt(&mut base.detection.interval_minutes, &other.detection.interval_minutes);

        // Baseline
        merge_opt(&mut base.baseline.fraction, &other.baseline.fraction);
        merge_opt(&mut base.baseline.scan_start, &other.baseline.scan_start);
        merge_opt(&mut base.baseline.trailing_window, &other.baseline.trailing_window);

        // Severity
        merge_opt(&mut base.severity.high_at_percent, &other.severity.high_at_percent);

        // Generator
        let (g, o) = (&mut base.generator, &other.generator);
        merge_opt(&mut g.start, &o.start);
        merge_opt(&mut g.interval_minutes, &o.interval_minutes);
        merge_opt(&mut g.total_hours, &o.total_hours);
        merge_opt(&mut g.baseline_value, &o.baseline_value);
        merge_opt(&mut g.noise, &o.noise);
        merge_opt(&mut g.midday_amplitude, &o.midday_amplitude);
        merge_opt(&mut g.drift_start_hour, &o.drift_start_hour);
        merge_opt(&mut g.drift_total_increase, &o.drift_total_increase);
        merge_opt(&mut g.seed, &o.seed);

        // Notify
        merge_opt(&mut base.notify.enabled, &other.notify.enabled);
        merge_opt(&mut base.notify.smtp_host, &other.notify.smtp_host);
        merge_opt(&mut base.notify.smtp_port, &other.notify.smtp_port);
    }

    /// Apply environment variable overrides.
    /// Pattern: `DRIFTWATCH_DETECTION_THRESHOLD`, `DRIFTWATCH_DATA_PATH`, etc.
    fn apply_env_overrides(config: &mut DriftwatchConfig) {
        if let Ok(val) = std::env::var("DRIFTWATCH_DATA_PATH") {
            config.data.path = Some(val);
        }
        if let Ok(val) = std::env::var("DRIFTWATCH_DATA_METRIC") {
            config.data.metric = Some(val);
        }
        if let Some(v) = env_parse::<f64>("DRIFTWATCH_DETECTION_THRESHOLD") {
            config.detection.threshold_fraction = Some(v);
        }
        if let Some(v) = env_parse::<u32>("DRIFTWATCH_DETECTION_SUSTAIN_MINUTES") {
            config.detection.sustain_minutes = Some(v);
        }
        if let Some(v) = env_parse::<u32>("DRIFTWATCH_DETECTION_INTERVAL_MINUTES") {
            config.detection.interval_minutes = Some(v);
        }
        if let Some(v) = env_parse::<f64>("DRIFTWATCH_BASELINE_FRACTION") {
            config.baseline.fraction = Some(v);
        }
        if let Some(v) = env_parse::<f64>("DRIFTWATCH_SEVERITY_HIGH_AT_PERCENT") {
            config.severity.high_at_percent = Some(v);
        }
        if let Some(v) = env_parse::<bool>("DRIFTWATCH_NOTIFY_ENABLED") {
            config.notify.enabled = Some(v);
        }
        if let Ok(val) = std::env::var("DRIFTWATCH_NOTIFY_SMTP_HOST") {
            config.notify.smtp_host = Some(val);
        }
        if let Some(v) = env_parse::<u16>("DRIFTWATCH_NOTIFY_SMTP_PORT") {
            config.notify.smtp_port = Some(v);
        }
        if let Some(v) = env_parse::<u64>("DRIFTWATCH_GENERATOR_SEED") {
            config.generator.seed = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(config: &mut DriftwatchConfig, cli: &CliOverrides) {
        merge_opt(&mut config.data.path, &cli.data_path);
        merge_opt(&mut config.data.metric, &cli.metric);
        merge_opt(&mut config.detection.threshold_fraction, &cli.threshold_fraction);
        merge_opt(&mut config.detection.sustain_minutes, &cli.sustain_minutes);
        merge_opt(&mut config.detection.interval_minutes, &cli.interval_minutes);
        merge_opt(&mut config.baseline.scan_start, &cli.scan_start);
        merge_opt(&mut config.notify.enabled, &cli.notify);
        merge_opt(&mut config.generator.seed, &cli.seed);
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn merge_opt<T: Clone>(base: &mut Option<T>, other: &Option<T>) {
    if other.is_some() {
        base.clone_from(other);
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
