//! Subcommand implementations. Each returns the text to print on stdout.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use driftwatch_analysis::baseline::supplier_for;
use driftwatch_analysis::{BaselineSummary, DeliveryOutcome, Monitor, SyntheticGenerator};
use driftwatch_core::config::{CliOverrides, DriftwatchConfig};
use driftwatch_core::errors::{DetectionError, PipelineError};
use driftwatch_core::models::Series;
use driftwatch_io::{read_series, write_series, SmtpNotifier};

use crate::args::{Cli, Command};
use crate::render;

/// Resolved configuration plus the root relative paths hang off.
#[derive(Debug, Clone)]
pub struct Context {
    pub root: PathBuf,
    pub config: DriftwatchConfig,
}

impl Context {
    pub fn load(root: &Path, overrides: &CliOverrides) -> Result<Self, PipelineError> {
        let config = DriftwatchConfig::load(root, Some(overrides))?;
        Ok(Self {
            root: root.to_path_buf(),
            config,
        })
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn data_path(&self) -> PathBuf {
        self.resolve(Path::new(&self.config.data.effective_path()))
    }

    pub fn load_series(&self) -> Result<Series, PipelineError> {
        Ok(read_series(
            &self.data_path(),
            &self.config.data.effective_metric(),
        )?)
    }
}

/// Load configuration and dispatch the parsed command line.
pub fn execute(cli: &Cli) -> anyhow::Result<String> {
    let ctx = Context::load(&cli.global.root, &cli.overrides())
        .with_context(|| format!("loading configuration from {}", cli.global.root.display()))?;
    tracing::debug!(root = %ctx.root.display(), command = ?cli.command, "dispatching");

    match &cli.command {
        Command::Scenario => Ok(render::scenario()),
        Command::Generate { output, .. } => generate(&ctx, output.as_deref()),
        Command::Baseline => baseline(&ctx),
        Command::Detect { json } => detect(&ctx, *json),
        Command::Alert => alert(&ctx),
        Command::Run { json, .. } => run(&ctx, *json),
    }
}

pub fn generate(ctx: &Context, output: Option<&Path>) -> anyhow::Result<String> {
    let path = match output {
        Some(p) => ctx.resolve(p),
        None => ctx.data_path(),
    };
    let metric = ctx.config.data.effective_metric();
    let series = SyntheticGenerator::from_config(&ctx.config.generator).generate();

    write_series(&path, &series, &metric).map_err(PipelineError::from)?;
    tracing::info!(path = %path.display(), rows = series.len(), "synthetic series written");
    Ok(render::generated(&path, &series, &metric))
}

pub fn baseline(ctx: &Context) -> anyhow::Result<String> {
    let series = ctx.load_series()?;
    let supplier = supplier_for(&ctx.config.baseline, series.len()).map_err(PipelineError::from)?;
    let value = supplier.baseline(&series).map_err(PipelineError::from)?;
    if !(value.is_finite() && value > 0.0) {
        return Err(PipelineError::from(DetectionError::InvalidBaseline { baseline: value }).into());
    }
    let summary = BaselineSummary::compute(&series, value)
        .ok_or(PipelineError::Detection(DetectionError::EmptySeries))?;

    Ok(render::baseline_summary(
        &ctx.config.data.effective_metric(),
        &ctx.config.data.effective_unit(),
        &summary,
    ))
}

pub fn detect(ctx: &Context, json: bool) -> anyhow::Result<String> {
    let series = ctx.load_series()?;
    let report = Monitor::new(&ctx.config).analyze(&series)?;
    if json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    Ok(render::detection(&report, &series))
}

pub fn alert(ctx: &Context) -> anyhow::Result<String> {
    let series = ctx.load_series()?;
    let report = Monitor::new(&ctx.config).analyze(&series)?;
    Ok(render::alert(&report))
}

/// Detection plus optional email. Delivery problems, including missing SMTP
/// credentials, are reported in the output and never fail the command.
pub fn run(ctx: &Context, json: bool) -> anyhow::Result<String> {
    let series = ctx.load_series()?;
    let monitor = Monitor::new(&ctx.config);
    let mut report = monitor.analyze(&series)?;

    if ctx.config.notify.effective_enabled() {
        match SmtpNotifier::from_env(&ctx.config.notify) {
            Ok(notifier) => monitor.deliver(&mut report, &notifier),
            Err(e) if report.alert.is_some() => {
                tracing::warn!(error = %e, "email notifier unavailable");
                report.delivery = DeliveryOutcome::Failed {
                    channel: "smtp".to_string(),
                    error: e.to_string(),
                };
            }
            Err(_) => report.delivery = DeliveryOutcome::NothingToSend,
        }
    }

    if json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    Ok(render::run(&report))
}
