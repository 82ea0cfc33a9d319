use chrono::{Duration, NaiveDate};
use driftwatch_analysis::detect;
use driftwatch_core::models::{Sample, Series};
use proptest::prelude::*;

fn make_series(values: &[f64]) -> Series {
    let t0 = NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Sample::new(t0 + Duration::minutes(5 * i as i64), v))
        .collect::<Vec<_>>()
        .into()
}

/// Multiplier that keeps a value clearly above the threshold line.
fn above() -> impl Strategy<Value = f64> {
    1.01f64..2.0
}

/// Multiplier that keeps a value clearly below the threshold line.
fn below() -> impl Strategy<Value = f64> {
    0.5f64..0.99
}

// ── Higher thresholds only delay or eliminate triggers ──────────────────────

proptest! {
    #[test]
    fn raising_threshold_never_advances_trigger(
        values in prop::collection::vec(50.0f64..300.0, 1..80),
        baseline in 80.0f64..150.0,
        t_low in 0.0f64..0.8,
        delta in 0.0f64..0.5,
        min in 1usize..8,
        start in 0usize..20,
    ) {
        let s = make_series(&values);
        let low = detect(&s, baseline, t_low, min, start).unwrap();
        let high = detect(&s, baseline, t_low + delta, min, start).unwrap();
        if let Some(h) = high {
            let l = low.expect("a trigger at the higher threshold implies one at the lower");
            prop_assert!(l.trigger_index <= h.trigger_index);
        }
    }
}

// ── One dip splits a run into two short ones ────────────────────────────────

proptest! {
    #[test]
    fn single_dip_resets_streak(
        baseline in 50.0f64..500.0,
        threshold in 0.0f64..1.0,
        min in 2usize..12,
        left_frac in 0.0f64..1.0,
        right_frac in 0.0f64..1.0,
        hi in above(),
        lo in below(),
    ) {
        let line = baseline * (1.0 + threshold);
        // Both halves shorter than `min`, whole run (plus the dip) at least `min`.
        let left = 1 + ((min - 1) as f64 * left_frac) as usize;
        let right = (min - left) + (left as f64 * right_frac) as usize;
        prop_assume!(left < min && right < min && left + right >= min);

        let mut values = vec![line * hi; left];
        values.push(line * lo);
        values.extend(std::iter::repeat(line * hi).take(right));

        let s = make_series(&values);
        prop_assert!(detect(&s, baseline, threshold, min, 0).unwrap().is_none());

        // Without the dip the same samples trigger.
        let unbroken = make_series(&vec![line * hi; left + right]);
        prop_assert!(detect(&unbroken, baseline, threshold, min, 0).unwrap().is_some());
    }
}

// ── Exactly `min` qualifying samples trigger, `min - 1` do not ─────────────

proptest! {
    #[test]
    fn minimum_run_is_exact(
        baseline in 50.0f64..500.0,
        threshold in 0.0f64..1.0,
        min in 1usize..15,
        lead in 0usize..10,
        hi in above(),
        lo in below(),
    ) {
        let line = baseline * (1.0 + threshold);
        let build = |run: usize| {
            let mut v = vec![line * lo; lead];
            v.extend(std::iter::repeat(line * hi).take(run));
            v.push(line * lo);
            make_series(&v)
        };

        let event = detect(&build(min), baseline, threshold, min, 0).unwrap();
        prop_assert_eq!(event.map(|e| e.trigger_index), Some(lead));

        if min > 1 {
            prop_assert!(detect(&build(min - 1), baseline, threshold, min, 0).unwrap().is_none());
        }
    }
}

// ── Pure function: same inputs, same answer ─────────────────────────────────

proptest! {
    #[test]
    fn detect_is_idempotent(
        values in prop::collection::vec(1.0f64..400.0, 1..60),
        baseline in 1.0f64..300.0,
        threshold in -0.5f64..1.0,
        min in 1usize..10,
        start in 0usize..70,
    ) {
        let s = make_series(&values);
        let first = detect(&s, baseline, threshold, min, start).unwrap();
        let second = detect(&s, baseline, threshold, min, start).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ── Trigger window lies inside the scan region and fully qualifies ──────────

proptest! {
    #[test]
    fn trigger_window_is_contained_and_qualifying(
        values in prop::collection::vec(50.0f64..300.0, 1..80),
        baseline in 80.0f64..150.0,
        threshold in 0.0f64..0.8,
        min in 1usize..8,
        start in 0usize..40,
    ) {
        let s = make_series(&values);
        let line = baseline * (1.0 + threshold);
        if let Some(event) = detect(&s, baseline, threshold, min, start).unwrap() {
            prop_assert!(event.trigger_index >= start);
            prop_assert!(event.window_end_index() < s.len());
            let window = event.trigger_window(&s);
            prop_assert_eq!(window.len(), min);
            for sample in window {
                prop_assert!(sample.value >= line);
            }
            // No earlier complete window exists.
            for i in start..event.trigger_index {
                let earlier = s.slice(i..i + min);
                let all = earlier.len() == min
                    && earlier.iter().all(|x| x.value >= line);
                prop_assert!(!all, "earlier qualifying window at {}", i);
            }
        }
    }
}

// ── Samples exactly on the threshold line count ─────────────────────────────

proptest! {
    #[test]
    fn samples_on_threshold_line_trigger(
        baseline in 0.01f64..10_000.0,
        threshold in 0.0f64..2.0,
        len in 1usize..20,
    ) {
        let line = baseline * (1.0 + threshold);
        let s = make_series(&vec![line; len]);
        let event = detect(&s, baseline, threshold, len, 0).unwrap();
        prop_assert!(event.is_some());
        prop_assert_eq!(event.unwrap().trigger_index, 0);
    }
}
