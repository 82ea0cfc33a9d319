//! Alert construction and rendering.
//!
//! An `Alert` is the operator-facing view of a `DriftEvent`: it adds the metric
//! name, display unit, sustained duration, and a severity decided by
//! `SeverityPolicy`.

use chrono::NaiveDateTime;
use serde::Serialize;

use driftwatch_core::constants::TIMESTAMP_FORMAT;
use driftwatch_core::models::DriftEvent;

use crate::severity::{Severity, SeverityPolicy};

const SUBJECT: &str = "Early Warning: Latency Drift Detected";

const WHY_IT_MATTERS: &[&str] =
    &["Gradual drift often precedes customer-facing slowness and incident escalation."];

const SUGGESTED_CHECKS: &[&str] = &[
    "Recent deploys/releases in the last 6 to 12 hours",
    "Downstream dependency latency (DB, cache, third-party APIs)",
    "Traffic/usage pattern changes (new batch job, campaign, cron spike)",
    "Resource saturation (CPU/memory), thread pools, queue depth",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub metric_name: String,
    pub unit: String,
    pub baseline: f64,
    pub trigger_time: NaiveDateTime,
    pub trigger_value: f64,
    pub trigger_percent: f64,
    pub sustained_minutes: u32,
    pub current_time: NaiveDateTime,
    pub current_value: f64,
    pub current_percent: f64,
    pub severity: Severity,
}

impl Alert {
    /// Build an alert from a detected event.
    ///
    /// `sustained_minutes` is the duration the sustain window covers; the
    /// event itself only knows the window length in samples.
    pub fn from_event(
        event: &DriftEvent,
        metric_name: &str,
        unit: &str,
        sustained_minutes: u32,
        policy: &SeverityPolicy,
    ) -> Self {
        Self {
            metric_name: metric_name.to_string(),
            unit: unit.to_string(),
            baseline: event.baseline,
            trigger_time: event.trigger_timestamp,
            trigger_value: event.trigger_value,
            trigger_percent: event.trigger_percent_above,
            sustained_minutes,
            current_time: event.latest_timestamp,
            current_value: event.latest_value,
            current_percent: event.latest_percent_above,
            severity: policy.classify(event.latest_percent_above),
        }
    }

    pub fn subject(&self) -> &'static str {
        SUBJECT
    }

    /// Plain-text alert body suitable for a terminal or an email.
    pub fn render_text(&self) -> String {
        let unit = &self.unit;
        let mut lines = vec![
            "ALERT: Early Warning - Latency Drift Detected".to_string(),
            String::new(),
            format!("- Metric: {}", self.metric_name),
            format!("- Baseline (healthy avg): {:.2} {unit}", self.baseline),
            format!(
                "- Drift started: {}",
                self.trigger_time.format(TIMESTAMP_FORMAT)
            ),
            format!(
                "- Drift at start: {:.2} {unit} ({:.2}% above baseline)",
                self.trigger_value, self.trigger_percent
            ),
            format!("- Sustained for: {} minutes", self.sustained_minutes),
            format!(
                "- Current level: {:.2} {unit} ({:.2}% above baseline)",
                self.current_value, self.current_percent
            ),
            format!("- Severity: {}", self.severity),
            String::new(),
            "Why it matters:".to_string(),
        ];
        lines.extend(WHY_IT_MATTERS.iter().map(|l| format!("- {l}")));
        lines.push(String::new());
        lines.push("Suggested checks (first 10 minutes):".to_string());
        lines.extend(SUGGESTED_CHECKS.iter().map(|l| format!("- {l}")));
        lines.join("\n")
    }
}
