//! Plain-text report rendering for the terminal.

use std::fmt::Write as _;
use std::path::Path;

use driftwatch_analysis::{BaselineSummary, DeliveryOutcome, MonitorReport};
use driftwatch_core::constants::TIMESTAMP_FORMAT;
use driftwatch_core::models::{percent_above, Series};

const PREVIEW_ROWS: usize = 3;

/// The failure story driftwatch exists to catch.
pub fn scenario() -> String {
    [
        "=== driftwatch: the failure scenario ===",
        "Problem: Silent latency degradation",
        "What happened: Latency slowly increased over several hours while the service stayed 'up'.",
        "Why monitoring failed: Alerts were based on fixed thresholds, so nothing triggered until it was already bad.",
        "Impact: Users experienced slowness and support tickets appeared before engineers noticed.",
        "What we want instead: Detect drift early and alert with context before users complain.",
    ]
    .join("\n")
}

/// Confirmation for a written series, with the first and last rows.
pub fn generated(path: &Path, series: &Series, metric: &str) -> String {
    let mut out = format!("Saved {} rows to {}\n", series.len(), path.display());
    let _ = writeln!(out, "timestamp,{metric}");

    let rows = series.samples();
    let row = |out: &mut String, i: usize| {
        let s = &rows[i];
        let _ = writeln!(out, "{},{:.2}", s.timestamp.format(TIMESTAMP_FORMAT), s.value);
    };

    if rows.len() <= PREVIEW_ROWS * 2 {
        (0..rows.len()).for_each(|i| row(&mut out, i));
    } else {
        (0..PREVIEW_ROWS).for_each(|i| row(&mut out, i));
        out.push_str("...\n");
        (rows.len() - PREVIEW_ROWS..rows.len()).for_each(|i| row(&mut out, i));
    }
    out.truncate(out.trim_end().len());
    out
}

pub fn baseline_summary(metric: &str, unit: &str, summary: &BaselineSummary) -> String {
    let mut lines = vec![
        "=== Baseline ===".to_string(),
        format!("Baseline {metric} (healthy avg): {:.2} {unit}", summary.baseline),
        format!("Current {metric} (latest): {:.2} {unit}", summary.current),
        format!("Change vs baseline: {:.2}%", summary.percent_change),
    ];
    if summary.significant {
        lines.push(
            "Warning: significantly above baseline, but may still be under fixed thresholds."
                .to_string(),
        );
    }
    lines.join("\n")
}

fn rule_lines(report: &MonitorReport) -> Vec<String> {
    vec![
        format!(
            "Baseline: {:.2} {} ({})",
            report.baseline, report.unit, report.baseline_method
        ),
        format!(
            "Rule: >= {:.0}% above baseline for {} minutes ({} samples), scanning from index {}",
            report.threshold_fraction * 100.0,
            report.sustain_minutes,
            report.sustain_samples,
            report.scan_start
        ),
    ]
}

/// Detection result with the qualifying window as evidence.
pub fn detection(report: &MonitorReport, series: &Series) -> String {
    let unit = &report.unit;
    let mut lines = vec![format!("=== Drift detection: {} ===", report.metric)];
    lines.extend(rule_lines(report));

    let Some(event) = &report.event else {
        lines.push("No sustained drift detected.".to_string());
        return lines.join("\n");
    };

    lines.push("Sustained drift detected.".to_string());
    lines.push(format!(
        "First trigger time: {}",
        event.trigger_timestamp.format(TIMESTAMP_FORMAT)
    ));
    lines.push(format!("Value at trigger: {:.2} {unit}", event.trigger_value));
    lines.push(format!(
        "Above baseline at trigger: {:.2}%",
        event.trigger_percent_above
    ));
    lines.push(format!(
        "--- Trigger window ({} samples = {} minutes) ---",
        event.sustain_samples, report.sustain_minutes
    ));
    for sample in event.trigger_window(series) {
        lines.push(format!(
            "{}  {:.2} {unit}  ({:.2}% above baseline)",
            sample.timestamp.format(TIMESTAMP_FORMAT),
            sample.value,
            percent_above(sample.value, event.baseline)
        ));
    }
    lines.push("---".to_string());
    lines.push(format!(
        "Latest value: {:.2} {unit} ({:.2}% above baseline)",
        event.latest_value, event.latest_percent_above
    ));
    lines.join("\n")
}

pub fn alert(report: &MonitorReport) -> String {
    match &report.alert {
        Some(alert) => alert.render_text(),
        None => "No sustained drift detected.".to_string(),
    }
}

/// Full run: rule, alert text, and what happened to delivery.
pub fn run(report: &MonitorReport) -> String {
    let mut lines = vec!["=== driftwatch: early detection of silent degradation ===".to_string()];
    lines.extend(rule_lines(report));
    lines.push(String::new());
    lines.push(alert(report));

    match &report.delivery {
        DeliveryOutcome::Sent { channel } => {
            lines.push(String::new());
            lines.push(format!("Alert sent via {channel}."));
        }
        DeliveryOutcome::Failed { channel, error } => {
            lines.push(String::new());
            lines.push(format!("Warning: alert not sent via {channel}: {error}"));
        }
        DeliveryOutcome::NotRequested | DeliveryOutcome::NothingToSend => {}
    }
    lines.join("\n")
}
