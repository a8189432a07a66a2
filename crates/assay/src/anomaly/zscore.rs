//! Z-score outlier detection.

use crate::input::Dataset;
use crate::profile::stats;

use super::detector::Detector;
use super::models::{AnomalyRecord, DetectionMethod, Evidence};

/// Fewest values for a meaningful standard deviation.
const MIN_VALUES: usize = 3;

/// Flags values more than `threshold` sample standard deviations from the mean.
#[derive(Debug, Clone, Copy)]
pub struct ZScoreDetector {
    threshold: f64,
}

impl Default for ZScoreDetector {
    fn default() -> Self {
        Self { threshold: 3.0 }
    }
}

impl ZScoreDetector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Detector for ZScoreDetector {
    fn method(&self) -> DetectionMethod {
        DetectionMethod::ZScore
    }

    fn threshold(&self) -> Option<f64> {
        Some(self.threshold)
    }

    fn detect(&self, dataset: &Dataset) -> Vec<AnomalyRecord> {
        let mut anomalies = Vec::new();

        for idx in dataset.numeric_columns() {
            let column = &dataset.column_names()[idx];
            let values = dataset.numeric_values(idx);
            if values.len() < MIN_VALUES {
                tracing::debug!(column = %column, count = values.len(), "z-score: too few values");
                continue;
            }

            let raw: Vec<f64> = values.iter().map(|(_, v)| *v).collect();
            let (Some(mean), Some(std)) = (stats::mean(&raw), stats::sample_std(&raw)) else {
                continue;
            };
            if std <= 0.0 || !std.is_finite() || !mean.is_finite() {
                tracing::debug!(column = %column, "z-score: zero variance");
                continue;
            }

            anomalies.extend(values.into_iter().filter_map(|(row, value)| {
                let z = (value - mean) / std;
                (z.is_finite() && z.abs() > self.threshold).then(|| AnomalyRecord {
                    row,
                    column: column.clone(),
                    value,
                    method: DetectionMethod::ZScore,
                    evidence: Evidence::ZScore { z_score: z, mean, std },
                })
            }));
        }

        anomalies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Value;

    #[test]
    fn test_flags_extreme_value() {
        let mut values = vec![10.0; 20];
        values.push(100.0);
        let ds = Dataset::from_columns(vec![("reading", values)]).unwrap();

        let anomalies = ZScoreDetector::default().detect(&ds);
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].row, 20);
        match anomalies[0].evidence {
            Evidence::ZScore { z_score, std, .. } => {
                assert!(z_score > 3.0);
                assert!(std > 0.0);
            }
            ref other => panic!("unexpected evidence {:?}", other),
        }
    }

    #[test]
    fn test_negative_outlier_has_negative_z() {
        let mut values = vec![50.0; 30];
        values[0] = -400.0;
        let ds = Dataset::from_columns(vec![("reading", values)]).unwrap();
        let anomalies = ZScoreDetector::default().detect(&ds);
        assert_eq!(anomalies.len(), 1);
        assert!(matches!(
            anomalies[0].evidence,
            Evidence::ZScore { z_score, .. } if z_score < -3.0
        ));
    }

    #[test]
    fn test_skips_short_and_constant_columns() {
        let ds = Dataset::from_columns(vec![
            ("short", vec![Value::Number(1.0), Value::Number(1000.0), Value::Null]),
            ("flat", vec![Value::Number(5.0), Value::Number(5.0), Value::Number(5.0)]),
        ])
        .unwrap();
        assert!(ZScoreDetector::new(0.1).detect(&ds).is_empty());
    }

    #[test]
    fn test_unrepresentable_spread_skipped() {
        let ds = Dataset::from_columns(vec![("reading", vec![1e308, 1e308, 1e308, 0.0])]).unwrap();
        assert!(ZScoreDetector::default().detect(&ds).is_empty());

        let ds = Dataset::from_columns(vec![("reading", vec![f64::MAX, -f64::MAX, 0.0, 1.0])]).unwrap();
        assert!(ZScoreDetector::new(0.1).detect(&ds).is_empty());
    }

    #[test]
    fn test_ignores_text_columns() {
        let ds = Dataset::from_columns(vec![("id", vec!["a", "b", "c", "d"])]).unwrap();
        assert!(ZScoreDetector::default().detect(&ds).is_empty());
    }
}
