//! Interquartile-range fence detection.

use crate::input::Dataset;
use crate::profile::NumericSummary;

use super::detector::Detector;
use super::models::{AnomalyRecord, DetectionMethod, Direction, Evidence};

/// Fewest values for meaningful quartiles.
const MIN_VALUES: usize = 4;

/// Flags values outside `[Q1 − k·IQR, Q3 + k·IQR]`.
#[derive(Debug, Clone, Copy)]
pub struct IqrDetector {
    multiplier: f64,
}

impl Default for IqrDetector {
    fn default() -> Self {
        Self { multiplier: 1.5 }
    }
}

impl IqrDetector {
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }
}

impl Detector for IqrDetector {
    fn method(&self) -> DetectionMethod {
        DetectionMethod::Iqr
    }

    fn threshold(&self) -> Option<f64> {
        Some(self.multiplier)
    }

    fn detect(&self, dataset: &Dataset) -> Vec<AnomalyRecord> {
        let mut anomalies = Vec::new();

        for idx in dataset.numeric_columns() {
            let column = &dataset.column_names()[idx];
            let values = dataset.numeric_values(idx);
            if values.len() < MIN_VALUES {
                continue;
            }

            let raw: Vec<f64> = values.iter().map(|(_, v)| *v).collect();
            let Some(summary) = NumericSummary::from_values(&raw) else {
                continue;
            };
            let iqr = summary.iqr();
            if iqr <= 0.0 {
                tracing::debug!(column = %column, "iqr: zero spread");
                continue;
            }

            if !iqr.is_finite() {
                tracing::debug!(column = %column, "iqr: spread not representable");
                continue;
            }

            let lower_bound = summary.q1 - self.multiplier * iqr;
            let upper_bound = summary.q3 + self.multiplier * iqr;
            if !lower_bound.is_finite() || !upper_bound.is_finite() {
                tracing::debug!(column = %column, "iqr: fences not representable");
                continue;
            }

            anomalies.extend(values.into_iter().filter_map(|(row, value)| {
                let direction = if value < lower_bound {
                    Direction::Below
                } else if value > upper_bound {
                    Direction::Above
                } else {
                    return None;
                };
                Some(AnomalyRecord {
                    row,
                    column: column.clone(),
                    value,
                    method: DetectionMethod::Iqr,
                    evidence: Evidence::Iqr {
                        q1: summary.q1,
                        q3: summary.q3,
                        iqr,
                        lower_bound,
                        upper_bound,
                        direction,
                    },
                })
            }));
        }

        anomalies
    }
}
