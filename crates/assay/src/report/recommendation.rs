//! Recommendations derived from metrics and anomalies.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::anomaly::AnomalyReport;
use crate::quality::QualityMetrics;

use super::level::QualityLevel;

/// One actionable recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    AddressMissing { count: usize, percentage: f64 },
    InvestigateAccuracy { count: usize },
    ReviewAnomalies { count: usize },
    RemoveDuplicates { count: usize },
    Verdict { level: QualityLevel },
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::AddressMissing { count, percentage } => {
                write!(f, "Address {} missing values ({:.1}% of data)", count, percentage)
            }
            Recommendation::InvestigateAccuracy { count } => {
                write!(f, "Investigate {} accuracy violations", count)
            }
            Recommendation::ReviewAnomalies { count } => {
                write!(f, "Review {} detected anomalies", count)
            }
            Recommendation::RemoveDuplicates { count } => {
                write!(f, "Remove {} duplicate records", count)
            }
            Recommendation::Verdict { level } => {
                write!(f, "Overall data quality: {} - {}", level.label(), level.verdict())
            }
        }
    }
}

/// Recommendations in fixed order, always ending with the verdict.
pub fn derive_recommendations(
    metrics: &QualityMetrics,
    anomalies: &AnomalyReport,
) -> Vec<Recommendation> {
    let mut out = Vec::new();

    let completeness = &metrics.completeness;
    if completeness.missing_cells > 0 {
        out.push(Recommendation::AddressMissing {
            count: completeness.missing_cells,
            percentage: completeness.missing_cells as f64 * 100.0
                / completeness.total_cells as f64,
        });
    }

    if metrics.accuracy.invalid_values > 0 {
        out.push(Recommendation::InvestigateAccuracy {
            count: metrics.accuracy.invalid_values,
        });
    }

    let total = anomalies.total();
    if total > 0 {
        out.push(Recommendation::ReviewAnomalies { count: total });
    }

    if metrics.uniqueness.duplicate_rows > 0 {
        out.push(Recommendation::RemoveDuplicates {
            count: metrics.uniqueness.duplicate_rows,
        });
    }

    out.push(Recommendation::Verdict {
        level: QualityLevel::from_score(metrics.overall_score),
    });

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anomaly::AnomalyDetector;
    use crate::input::{Dataset, Value};
    use crate::quality::QualityChecker;

    #[test]
    fn test_messages() {
        assert_eq!(
            Recommendation::AddressMissing {
                count: 7,
                percentage: 1.0
            }
            .to_string(),
            "Address 7 missing values (1.0% of data)"
        );
        assert_eq!(
            Recommendation::Verdict {
                level: QualityLevel::Good
            }
            .to_string(),
            "Overall data quality: GOOD - Minor issues to address"
        );
    }

    #[test]
    fn test_order_and_verdict() {
        let ds = Dataset::from_columns(vec![
            ("ph", vec![Value::Number(7.0), Value::Number(7.0), Value::Null, Value::Number(15.5)]),
            ("lab", vec![Value::text("A"), Value::text("A"), Value::text("B"), Value::text("C")]),
        ])
        .unwrap();

        let metrics = QualityChecker::new().calculate_all_metrics(&ds);
        let anomalies = AnomalyDetector::new().detect_all_anomalies(&ds);
        let recs = derive_recommendations(&metrics, &anomalies);

        assert!(matches!(recs[0], Recommendation::AddressMissing { count: 1, .. }));
        assert!(matches!(recs[1], Recommendation::InvestigateAccuracy { count: 1 }));
        assert!(matches!(recs[2], Recommendation::ReviewAnomalies { .. }));
        assert!(matches!(recs[3], Recommendation::RemoveDuplicates { count: 1 }));
        assert!(matches!(recs.last(), Some(Recommendation::Verdict { .. })));
    }

    #[test]
    fn test_clean_data_only_verdict() {
        let ds = Dataset::from_columns(vec![("ph", vec![7.0, 7.1, 7.2])]).unwrap();
        let metrics = QualityChecker::new().calculate_all_metrics(&ds);
        let anomalies = AnomalyDetector::new().detect_all_anomalies(&ds);
        let recs = derive_recommendations(&metrics, &anomalies);
        assert_eq!(
            recs,
            vec![Recommendation::Verdict {
                level: QualityLevel::Excellent
            }]
        );
    }
}
