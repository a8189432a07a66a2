//! Profile data structures.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::ColumnType;

use super::stats;

/// Marker message used when a dataset has no numeric columns.
pub const NO_NUMERIC_COLUMNS: &str = "No numeric columns found";

/// Complete structural profile of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub overview: Overview,
    pub columns: IndexMap<String, ColumnProfile>,
    pub missing_values: MissingSummary,
    pub data_types: TypeDistribution,
    pub statistics: StatisticsSummary,
}

/// Dataset shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub rows: usize,
    pub columns: usize,
    /// Approximate in-memory footprint.
    pub memory_bytes: usize,
    pub column_names: Vec<String>,
}

impl Overview {
    /// Footprint in kibibytes.
    pub fn memory_kb(&self) -> f64 {
        self.memory_bytes as f64 / 1024.0
    }
}

/// Per-column profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub dtype: ColumnType,
    pub non_null_count: usize,
    pub null_count: usize,
    pub null_percentage: f64,
    pub distinct_count: usize,
    pub distinct_percentage: f64,
    /// Present for numeric columns only.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub numeric: Option<NumericProfile>,
}

/// Central tendency and spread of a numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericProfile {
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Sample standard deviation; needs two values.
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Missing-value summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingSummary {
    pub total_missing: usize,
    pub total_cells: usize,
    pub missing_percentage: f64,
    /// Only columns with at least one missing value.
    pub by_column: IndexMap<String, ColumnMissing>,
}

/// Missing values in one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnMissing {
    pub count: usize,
    pub percentage: f64,
}

/// Column counts per storage type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDistribution {
    pub counts: IndexMap<ColumnType, usize>,
    pub numeric_columns: Vec<String>,
    pub text_columns: Vec<String>,
}

/// The statistics section of a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StatisticsSummary {
    NoNumericColumns {
        message: String,
    },
    Numeric {
        describe: IndexMap<String, NumericSummary>,
        /// Present when at least two numeric columns exist.
        #[serde(skip_serializing_if = "Option::is_none", default)]
        correlation: Option<CorrelationMatrix>,
    },
}

impl StatisticsSummary {
    /// Returns true for the no-numeric-columns marker.
    pub fn is_empty(&self) -> bool {
        matches!(self, StatisticsSummary::NoNumericColumns { .. })
    }
}

/// Describe-table row for one numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: f64,
    pub std: Option<f64>,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl NumericSummary {
    /// Summarize a slice of values, `None` when it is empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let sorted = stats::sorted(values);
        let first = *sorted.first()?;
        let last = *sorted.last()?;
        Some(Self {
            count: sorted.len(),
            mean: stats::mean(&sorted)?,
            std: stats::sample_std(values),
            min: first,
            q1: stats::quantile_sorted(&sorted, 0.25)?,
            median: stats::quantile_sorted(&sorted, 0.5)?,
            q3: stats::quantile_sorted(&sorted, 0.75)?,
            max: last,
        })
    }

    /// Interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Symmetric Pearson correlation matrix over numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// Row-major coefficients; `None` where the coefficient is undefined.
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Coefficient between two columns by name.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        self.values[i][j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_summary() {
        let s = NumericSummary::from_values(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(s.count, 4);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 4.0);
        assert!((s.q1 - 1.75).abs() < 1e-12);
        assert!((s.iqr() - 1.5).abs() < 1e-12);
        assert!(NumericSummary::from_values(&[]).is_none());
    }

    #[test]
    fn test_single_value_summary_has_no_std() {
        let s = NumericSummary::from_values(&[5.0]).unwrap();
        assert_eq!(s.std, None);
        assert_eq!(s.median, 5.0);
    }

    #[test]
    fn test_statistics_serde_tag() {
        let summary = StatisticsSummary::NoNumericColumns {
            message: NO_NUMERIC_COLUMNS.to_string(),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["status"], "no_numeric_columns");
        assert_eq!(json["message"], NO_NUMERIC_COLUMNS);
    }
}
