//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use driftwatch_core::config::CliOverrides;

/// Early warning for slow, sustained latency drift.
#[derive(Parser, Debug, Clone)]
#[command(name = "driftwatch", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand. Each one overrides the matching
/// config file or environment setting.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Project root holding `driftwatch.toml`; relative data paths resolve here
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Series CSV file
    #[arg(long, global = true)]
    pub data: Option<String>,

    /// Metric column to read
    #[arg(long, global = true)]
    pub metric: Option<String>,

    /// Fraction above baseline that counts as elevated (0.20 = +20%)
    #[arg(long, global = true)]
    pub threshold: Option<f64>,

    /// Minutes the excursion must be sustained
    #[arg(long, global = true)]
    pub sustain_minutes: Option<u32>,

    /// Sampling interval of the series, in minutes
    #[arg(long, global = true)]
    pub interval_minutes: Option<u32>,

    /// First sample index to scan (default: right after the baseline window)
    #[arg(long, global = true)]
    pub scan_start: Option<usize>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Describe the failure this tool is meant to catch
    Scenario,

    /// Write a synthetic two-day latency series with a slow drift
    Generate {
        /// Output CSV (default: the configured data path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// RNG seed for a reproducible series
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Compare the latest sample with the baseline
    Baseline,

    /// Scan for a sustained drift window
    Detect {
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the early-warning alert, if any
    Alert,

    /// Detect, alert, and optionally email the alert
    Run {
        /// Send the alert over SMTP (credentials from SMTP_USER, SMTP_PASS, EMAIL_TO)
        #[arg(long)]
        notify: bool,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Config overrides carried by the command line.
    pub fn overrides(&self) -> CliOverrides {
        let (notify, seed) = match &self.command {
            Command::Run { notify: true, .. } => (Some(true), None),
            Command::Generate { seed, .. } => (None, *seed),
            _ => (None, None),
        };
        CliOverrides {
            data_path: self.global.data.clone(),
            metric: self.global.metric.clone(),
            threshold_fraction: self.global.threshold,
            sustain_minutes: self.global.sustain_minutes,
            interval_minutes: self.global.interval_minutes,
            scan_start: self.global.scan_start,
            notify,
            seed,
        }
    }
}
