//! End-to-end monitor run: baseline, detection, alert, optional delivery.
//!
//! Delivery never changes the outcome of detection. A failed send is logged
//! and recorded on the report, and the alert is still returned to the caller.

use serde::Serialize;

use driftwatch_core::config::DriftwatchConfig;
use driftwatch_core::errors::{DetectionError, PipelineError};
use driftwatch_core::models::{DriftEvent, Series};
use driftwatch_core::traits::Notifier;

use crate::alert::Alert;
use crate::baseline::{self, BaselineSummary};
use crate::detector::DriftDetector;
use crate::severity::SeverityPolicy;

/// What happened to the alert after detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryOutcome {
    /// No notifier was supplied.
    NotRequested,
    /// A notifier was supplied but there was no alert to send.
    NothingToSend,
    Sent { channel: String },
    Failed { channel: String, error: String },
}

/// Everything a run learned, ready for printing or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct MonitorReport {
    pub metric: String,
    pub unit: String,
    pub baseline: f64,
    pub baseline_method: String,
    pub scan_start: usize,
    pub threshold_fraction: f64,
    pub sustain_samples: usize,
    pub sustain_minutes: u32,
    pub summary: BaselineSummary,
    pub event: Option<DriftEvent>,
    pub alert: Option<Alert>,
    pub delivery: DeliveryOutcome,
}

impl MonitorReport {
    pub fn drift_detected(&self) -> bool {
        self.event.is_some()
    }
}

/// Runs the configured detection policy over a loaded series.
pub struct Monitor<'a> {
    config: &'a DriftwatchConfig,
}

impl<'a> Monitor<'a> {
    pub fn new(config: &'a DriftwatchConfig) -> Self {
        Self { config }
    }

    pub fn detector(&self) -> DriftDetector {
        DriftDetector::new(
            self.config.detection.effective_threshold_fraction(),
            self.config.detection.effective_sustain_samples(),
        )
    }

    pub fn severity_policy(&self) -> SeverityPolicy {
        SeverityPolicy::from_config(&self.config.severity)
    }

    /// Compute the baseline, scan for drift, and build the alert if any.
    pub fn analyze(&self, series: &Series) -> Result<MonitorReport, PipelineError> {
        if series.is_empty() {
            return Err(DetectionError::EmptySeries.into());
        }

        let supplier = baseline::supplier_for(&self.config.baseline, series.len())?;
        let baseline = supplier.baseline(series)?;
        let scan_start = self.config.baseline.effective_scan_start(series.len());
        let detector = self.detector();

        let _span = tracing::info_span!(
            "driftwatch.monitor",
            baseline_method = supplier.name(),
            scan_start,
            len = series.len()
        )
        .entered();

        let event = detector.detect(series, baseline, scan_start)?;

        let metric = self.config.data.effective_metric();
        let unit = self.config.data.effective_unit();
        let sustain_minutes = self.config.detection.effective_sustain_duration_minutes();

        let alert = event.as_ref().map(|e| {
            Alert::from_event(e, &metric, &unit, sustain_minutes, &self.severity_policy())
        });

        let summary = BaselineSummary::compute(series, baseline)
            .ok_or(PipelineError::Detection(DetectionError::EmptySeries))?;

        Ok(MonitorReport {
            metric,
            unit,
            baseline,
            baseline_method: supplier.name().to_string(),
            scan_start,
            threshold_fraction: detector.threshold_fraction,
            sustain_samples: detector.min_consecutive_samples,
            sustain_minutes,
            summary,
            event,
            alert,
            delivery: DeliveryOutcome::NotRequested,
        })
    }

    /// Send the report's alert through `notifier` and record the outcome.
    pub fn deliver(&self, report: &mut MonitorReport, notifier: &dyn Notifier) {
        let Some(alert) = &report.alert else {
            report.delivery = DeliveryOutcome::NothingToSend;
            return;
        };

        let channel = notifier.name().to_string();
        report.delivery = match notifier.send(alert.subject(), &alert.render_text()) {
            Ok(()) => {
                tracing::info!(channel = %channel, "alert delivered");
                DeliveryOutcome::Sent { channel }
            }
            Err(e) => {
                tracing::warn!(channel = %channel, error = %e, "alert delivery failed");
                DeliveryOutcome::Failed {
                    channel,
                    error: e.to_string(),
                }
            }
        };
    }

    /// `analyze`, then `deliver` when a notifier is supplied.
    pub fn run(
        &self,
        series: &Series,
        notifier: Option<&dyn Notifier>,
    ) -> Result<MonitorReport, PipelineError> {
        let mut report = self.analyze(series)?;
        if let Some(notifier) = notifier {
            self.deliver(&mut report, notifier);
        }
        Ok(report)
    }
}
