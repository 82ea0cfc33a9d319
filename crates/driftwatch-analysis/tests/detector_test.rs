//! Detector behavior on hand-built series.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use driftwatch_analysis::{detect, DriftDetector};
use driftwatch_core::models::{Sample, Series};

fn t0() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn series(values: &[f64]) -> Series {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Sample::new(t0() + Duration::minutes(5 * i as i64), v))
        .collect::<Vec<_>>()
        .into()
}

// ── Worked scenarios ────────────────────────────────────────────────────────

#[test]
fn qualifying_prefix_triggers_at_index_zero() {
    let s = series(&[130.0, 125.0, 121.0, 119.0, 140.0]);
    let event = detect(&s, 100.0, 0.20, 3, 0).unwrap().expect("drift expected");
    assert_eq!(event.trigger_index, 0);
    assert_eq!(event.trigger_timestamp, t0());
    assert_eq!(event.sustain_samples, 3);
    assert_eq!(event.latest_index, 4);
    assert_eq!(event.latest_timestamp, t0() + Duration::minutes(20));
}

#[test]
fn dip_before_third_sample_means_no_event() {
    let s = series(&[130.0, 125.0, 119.0, 121.0, 140.0]);
    assert!(detect(&s, 100.0, 0.20, 3, 0).unwrap().is_none());
}

// ── Boundary and run-length rules ───────────────────────────────────────────

#[test]
fn value_exactly_at_threshold_qualifies() {
    // (120 - 100) / 100 == 0.20 exactly
    let s = series(&[120.0, 120.0, 120.0]);
    let event = detect(&s, 100.0, 0.20, 3, 0).unwrap().unwrap();
    assert_eq!(event.trigger_index, 0);

    // (250 - 200) / 200 == 0.25 exactly
    let s = series(&[250.0, 250.0]);
    assert!(detect(&s, 200.0, 0.25, 2, 0).unwrap().is_some());
}

#[test]
fn value_on_threshold_line_qualifies_despite_rounding() {
    // (v - b) / b lands just under t for these, the line comparison does not.
    for (baseline, threshold) in [(7.0, 0.3), (181.37, 0.15)] {
        let line = baseline * (1.0 + threshold);
        let s = series(&[line]);
        let event = detect(&s, baseline, threshold, 1, 0).unwrap();
        assert!(event.is_some(), "baseline {baseline}, threshold {threshold}");
    }
}

#[test]
fn run_of_exactly_min_triggers_and_one_shorter_does_not() {
    let exact = series(&[100.0, 150.0, 150.0, 150.0, 150.0, 100.0]);
    let event = detect(&exact, 100.0, 0.2, 4, 0).unwrap().unwrap();
    assert_eq!(event.trigger_index, 1);
    assert_eq!(event.window_end_index(), 4);

    let short = series(&[100.0, 150.0, 150.0, 150.0, 100.0, 100.0]);
    assert!(detect(&short, 100.0, 0.2, 4, 0).unwrap().is_none());
}

#[test]
fn earliest_window_wins_over_longer_later_run() {
    let s = series(&[
        150.0, 150.0, 100.0, 150.0, 150.0, 150.0, 150.0, 150.0, 150.0,
    ]);
    let event = detect(&s, 100.0, 0.2, 2, 0).unwrap().unwrap();
    assert_eq!(event.trigger_index, 0);
}

#[test]
fn scan_ignores_samples_before_start_index() {
    // The first three samples would qualify, but scanning starts at 3.
    let s = series(&[150.0, 150.0, 150.0, 100.0, 150.0, 150.0, 150.0]);
    let event = detect(&s, 100.0, 0.2, 3, 3).unwrap().unwrap();
    assert_eq!(event.trigger_index, 4);

    // A run straddling start_index only counts from start_index onward.
    let s = series(&[150.0, 150.0, 150.0, 150.0]);
    let event = detect(&s, 100.0, 0.2, 3, 1).unwrap().unwrap();
    assert_eq!(event.trigger_index, 1);
}

#[test]
fn sustain_window_longer_than_scan_region_is_no_event() {
    let s = series(&[150.0; 5]);
    assert!(detect(&s, 100.0, 0.2, 6, 0).unwrap().is_none());
    assert!(detect(&s, 100.0, 0.2, 3, 3).unwrap().is_none());
}

#[test]
fn trigger_window_returns_qualifying_samples() {
    let s = series(&[100.0, 130.0, 140.0, 150.0, 90.0]);
    let event = detect(&s, 100.0, 0.2, 3, 0).unwrap().unwrap();
    let window: Vec<f64> = event.trigger_window(&s).iter().map(|x| x.value).collect();
    assert_eq!(window, vec![130.0, 140.0, 150.0]);
}

#[test]
fn detector_struct_matches_free_function() {
    let s = series(&[100.0, 130.0, 140.0, 150.0, 90.0]);
    let detector = DriftDetector::new(0.2, 2);
    assert_eq!(
        detector.detect(&s, 100.0, 0).unwrap(),
        detect(&s, 100.0, 0.2, 2, 0).unwrap()
    );
}

#[test]
fn event_serializes_to_json() {
    let s = series(&[130.0, 130.0]);
    let event = detect(&s, 100.0, 0.2, 2, 0).unwrap().unwrap();
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["trigger_index"], 0);
    assert_eq!(json["trigger_timestamp"], "2026-01-01T00:00:00");
    assert_eq!(json["sustain_samples"], 2);
}
