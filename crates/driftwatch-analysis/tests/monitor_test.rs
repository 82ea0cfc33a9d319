//! End-to-end monitor runs over synthetic data with stub notifiers.

use std::cell::RefCell;

use driftwatch_analysis::{DeliveryOutcome, Monitor, Severity, SyntheticGenerator};
use driftwatch_core::config::{BaselineConfig, DetectionConfig, DriftwatchConfig};
use driftwatch_core::errors::{NotifyError, PipelineError};
use driftwatch_core::models::Series;
use driftwatch_core::traits::Notifier;

#[derive(Default)]
struct RecordingNotifier {
    sent: RefCell<Vec<(String, String)>>,
}

impl Notifier for RecordingNotifier {
    fn name(&self) -> &str {
        "recording"
    }

    fn send(&self, subject: &str, body: &str) -> Result<(), NotifyError> {
        self.sent
            .borrow_mut()
            .push((subject.to_string(), body.to_string()));
        Ok(())
    }
}

struct FailingNotifier;

impl Notifier for FailingNotifier {
    fn name(&self) -> &str {
        "smtp"
    }

    fn send(&self, _subject: &str, _body: &str) -> Result<(), NotifyError> {
        Err(NotifyError::MissingCredentials {
            missing: vec!["SMTP_USER".to_string()],
        })
    }
}

fn drifting_series() -> Series {
    SyntheticGenerator::default().with_seed(2026).generate()
}

fn flat_series() -> Series {
    SyntheticGenerator {
        drift_total_increase: 0.0,
        ..SyntheticGenerator::default().with_seed(2026)
    }
    .generate()
}

#[test]
fn default_policy_finds_drift_on_day_two() {
    let config = DriftwatchConfig::default();
    let series = drifting_series();
    let report = Monitor::new(&config).analyze(&series).unwrap();

    assert_eq!(report.scan_start, 288);
    assert_eq!(report.sustain_samples, 12);
    assert_eq!(report.sustain_minutes, 60);
    assert_eq!(report.baseline_method, "range_mean");
    assert!(report.baseline > 180.0 && report.baseline < 190.0);

    let event = report.event.as_ref().expect("30% drift must cross +20%");
    assert!(event.trigger_index >= 288);
    assert!(event.trigger_percent_above >= 20.0);
    assert_eq!(event.latest_index, series.len() - 1);

    let alert = report.alert.as_ref().unwrap();
    assert_eq!(alert.metric_name, "p95_latency_ms");
    assert_eq!(alert.sustained_minutes, 60);
    let expected = if event.latest_percent_above >= 30.0 {
        Severity::High
    } else {
        Severity::Medium
    };
    assert_eq!(alert.severity, expected);
    assert_eq!(report.delivery, DeliveryOutcome::NotRequested);
}

#[test]
fn flat_series_has_no_drift() {
    let config = DriftwatchConfig::default();
    let report = Monitor::new(&config).analyze(&flat_series()).unwrap();
    assert!(!report.drift_detected());
    assert!(report.alert.is_none());
    assert!(!report.summary.significant);
}

#[test]
fn successful_delivery_is_recorded() {
    let config = DriftwatchConfig::default();
    let notifier = RecordingNotifier::default();
    let report = Monitor::new(&config)
        .run(&drifting_series(), Some(&notifier))
        .unwrap();

    assert_eq!(
        report.delivery,
        DeliveryOutcome::Sent {
            channel: "recording".to_string()
        }
    );
    let sent = notifier.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "Early Warning: Latency Drift Detected");
    assert!(sent[0].1.contains("- Metric: p95_latency_ms"));
    assert!(sent[0].1.contains("- Sustained for: 60 minutes"));
}

#[test]
fn delivery_failure_keeps_detection_result() {
    let config = DriftwatchConfig::default();
    let series = drifting_series();
    let monitor = Monitor::new(&config);

    let plain = monitor.analyze(&series).unwrap();
    let report = monitor.run(&series, Some(&FailingNotifier)).unwrap();

    assert_eq!(report.event, plain.event);
    assert_eq!(report.alert, plain.alert);
    match &report.delivery {
        DeliveryOutcome::Failed { channel, error } => {
            assert_eq!(channel, "smtp");
            assert!(error.contains("SMTP_USER"));
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[test]
fn notifier_is_not_called_without_drift() {
    let config = DriftwatchConfig::default();
    let notifier = RecordingNotifier::default();
    let report = Monitor::new(&config)
        .run(&flat_series(), Some(&notifier))
        .unwrap();
    assert_eq!(report.delivery, DeliveryOutcome::NothingToSend);
    assert!(notifier.sent.borrow().is_empty());
}

#[test]
fn trailing_baseline_and_custom_scan_start() {
    let config = DriftwatchConfig {
        baseline: BaselineConfig {
            trailing_window: Some(48),
            scan_start: Some(300),
            ..Default::default()
        },
        ..Default::default()
    };
    let report = Monitor::new(&config).analyze(&drifting_series()).unwrap();
    assert_eq!(report.baseline_method, "trailing_mean");
    assert_eq!(report.scan_start, 300);
    if let Some(event) = &report.event {
        assert!(event.trigger_index >= 300);
    }
}

#[test]
fn stricter_rule_delays_trigger() {
    let series = drifting_series();
    let loose = DriftwatchConfig {
        detection: DetectionConfig {
            threshold_fraction: Some(0.15),
            sustain_minutes: Some(30),
            ..Default::default()
        },
        ..Default::default()
    };
    let strict = DriftwatchConfig::default();

    let loose_idx = Monitor::new(&loose)
        .analyze(&series)
        .unwrap()
        .event
        .unwrap()
        .trigger_index;
    let strict_idx = Monitor::new(&strict)
        .analyze(&series)
        .unwrap()
        .event
        .unwrap()
        .trigger_index;
    assert!(loose_idx <= strict_idx);
}

#[test]
fn empty_series_is_an_error() {
    let config = DriftwatchConfig::default();
    match Monitor::new(&config).analyze(&Series::default()) {
        Err(PipelineError::Detection(_)) => {}
        other => panic!("expected detection error, got {other:?}"),
    }
}

#[test]
fn too_short_series_reports_baseline_error() {
    let config = DriftwatchConfig::default();
    let one = Series::new(drifting_series().samples()[..1].to_vec());
    assert!(matches!(
        Monitor::new(&config).analyze(&one),
        Err(PipelineError::Baseline(_))
    ));
}

#[test]
fn report_serializes_with_tagged_delivery() {
    let config = DriftwatchConfig::default();
    let report = Monitor::new(&config).analyze(&drifting_series()).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["delivery"]["status"], "not_requested");
    let severity = json["alert"]["severity"].as_str().unwrap();
    assert!(severity == "HIGH" || severity == "MEDIUM");
}
