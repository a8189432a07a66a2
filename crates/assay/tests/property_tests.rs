//! Property-based tests for Assay analysis components.
//!
//! These tests use proptest to generate random datasets and verify that
//! scoring and detection maintain their invariants under all conditions.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p assay --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p assay --test property_tests
//! ```

use proptest::prelude::*;

use assay::anomaly::{Detector, IqrDetector, ZScoreDetector};
use assay::{AnomalyDetector, Dataset, Profiler, QualityChecker, QualityLevel, Value};

// =============================================================================
// Test Strategies
// =============================================================================

/// A cell that is sometimes missing.
fn maybe_number(range: std::ops::Range<f64>) -> impl Strategy<Value = Value> {
    prop_oneof![
        1 => Just(Value::Null),
        6 => range.prop_map(Value::Number),
    ]
}

/// A short label, sometimes numeric text.
fn label() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        "[A-C]{1,2}".prop_map(Value::Text),
        (0u32..5).prop_map(|n| Value::Text(n.to_string())),
    ]
}

/// Lab-like datasets with a ruled column, a free numeric column and a label.
fn lab_dataset() -> impl Strategy<Value = Dataset> {
    (0usize..40)
        .prop_flat_map(|rows| {
            (
                prop::collection::vec(maybe_number(-5.0..20.0), rows),
                prop::collection::vec(maybe_number(-1000.0..1000.0), rows),
                prop::collection::vec(label(), rows),
            )
        })
        .prop_map(|(ph, value, labels)| {
            Dataset::from_columns(vec![("ph", ph), ("value", value), ("label", labels)])
                .expect("columns have equal length")
        })
}

/// A single numeric column of exactly `len` values.
fn numeric_column(len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6f64, len)
}

fn in_bounds(score: f64) -> bool {
    (0.0..=100.0).contains(&score)
}

// =============================================================================
// Score Bounds
// =============================================================================

proptest! {
    #[test]
    fn scores_within_bounds(ds in lab_dataset()) {
        let metrics = QualityChecker::new().calculate_all_metrics(&ds);
        prop_assert!(in_bounds(metrics.completeness.score));
        prop_assert!(in_bounds(metrics.accuracy.score));
        prop_assert!(in_bounds(metrics.consistency.score));
        prop_assert!(in_bounds(metrics.uniqueness.score));
        prop_assert!(in_bounds(metrics.overall_score));
    }

    #[test]
    fn accuracy_counts_match_violations(ds in lab_dataset()) {
        let metrics = QualityChecker::new().calculate_all_metrics(&ds);
        let anomalies = AnomalyDetector::new().detect_all_anomalies(&ds);
        prop_assert_eq!(metrics.accuracy.invalid_values, anomalies.domain_rules.count);
        prop_assert!(metrics.accuracy.invalid_values <= metrics.accuracy.checked_values);
    }

    #[test]
    fn level_matches_score(score in 0.0..=100.0f64) {
        let level = QualityLevel::from_score(score);
        let expected = if score >= 90.0 {
            QualityLevel::Excellent
        } else if score >= 75.0 {
            QualityLevel::Good
        } else if score >= 60.0 {
            QualityLevel::Fair
        } else {
            QualityLevel::Poor
        };
        prop_assert_eq!(level, expected);
    }
}

// =============================================================================
// Idempotence
// =============================================================================

proptest! {
    #[test]
    fn profile_is_idempotent(ds in lab_dataset()) {
        let profiler = Profiler::new();
        let first = serde_json::to_string(&profiler.generate_profile(&ds)).unwrap();
        let second = serde_json::to_string(&profiler.generate_profile(&ds)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn metrics_are_idempotent(ds in lab_dataset()) {
        let checker = QualityChecker::new();
        let first = serde_json::to_string(&checker.calculate_all_metrics(&ds)).unwrap();
        let second = serde_json::to_string(&checker.calculate_all_metrics(&ds)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn anomalies_are_idempotent(ds in lab_dataset()) {
        let detector = AnomalyDetector::new();
        let first = serde_json::to_string(&detector.detect_all_anomalies(&ds)).unwrap();
        let second = serde_json::to_string(&detector.detect_all_anomalies(&ds)).unwrap();
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// Detector Guards
// =============================================================================

proptest! {
    #[test]
    fn zscore_ignores_short_columns(values in (0usize..3).prop_flat_map(numeric_column)) {
        let ds = Dataset::from_columns(vec![("reading", values)]).unwrap();
        prop_assert!(ZScoreDetector::new(0.1).detect(&ds).is_empty());
    }

    #[test]
    fn iqr_ignores_short_columns(values in (0usize..4).prop_flat_map(numeric_column)) {
        let ds = Dataset::from_columns(vec![("reading", values)]).unwrap();
        prop_assert!(IqrDetector::new(0.1).detect(&ds).is_empty());
    }

    #[test]
    fn constant_columns_never_flagged(value in -1.0e6..1.0e6f64, len in 0usize..50) {
        let ds = Dataset::from_columns(vec![("reading", vec![value; len])]).unwrap();
        prop_assert!(ZScoreDetector::new(0.1).detect(&ds).is_empty());
        prop_assert!(IqrDetector::new(0.1).detect(&ds).is_empty());
    }

    #[test]
    fn valid_ph_never_flagged(values in prop::collection::vec(0.0..=14.0f64, 0..60)) {
        let ds = Dataset::from_columns(vec![("ph", values)]).unwrap();
        let anomalies = AnomalyDetector::new().detect_domain_violations(&ds);
        prop_assert_eq!(anomalies.count, 0);
    }

    #[test]
    fn zscore_flags_exceed_threshold(values in (3usize..40).prop_flat_map(numeric_column)) {
        let ds = Dataset::from_columns(vec![("reading", values)]).unwrap();
        for record in ZScoreDetector::new(2.0).detect(&ds) {
            if let assay::Evidence::ZScore { z_score, .. } = record.evidence {
                prop_assert!(z_score.abs() > 2.0);
            } else {
                prop_assert!(false, "unexpected evidence kind");
            }
        }
    }
}
