/// driftwatch version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "driftwatch.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "DRIFTWATCH_LOG";

/// Column holding sample timestamps in series CSV files.
pub const TIMESTAMP_COLUMN: &str = "timestamp";

/// Timestamp layout used when writing series CSV files.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Percent change against baseline considered worth calling out in a baseline summary.
pub const SIGNIFICANT_CHANGE_PERCENT: f64 = 20.0;
