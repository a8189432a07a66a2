//! Quality metric models.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::rules::{Field, RuleSide};

/// The four scored quality dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Completeness,
    Accuracy,
    Consistency,
    Uniqueness,
}

impl MetricKind {
    /// All dimensions in report order.
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Completeness,
        MetricKind::Accuracy,
        MetricKind::Consistency,
        MetricKind::Uniqueness,
    ];

    /// Stable identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Completeness => "completeness",
            MetricKind::Accuracy => "accuracy",
            MetricKind::Consistency => "consistency",
            MetricKind::Uniqueness => "uniqueness",
        }
    }

    /// Capitalized label for rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::Completeness => "Completeness",
            MetricKind::Accuracy => "Accuracy",
            MetricKind::Consistency => "Consistency",
            MetricKind::Uniqueness => "Uniqueness",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Share of non-null cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletenessMetric {
    /// Percentage in [0, 100].
    pub score: f64,
    pub total_cells: usize,
    pub non_null_cells: usize,
    pub missing_cells: usize,
    /// Per-column completeness percentage.
    pub by_column: IndexMap<String, f64>,
}

/// Direction of an accuracy violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundViolation {
    BelowMinimum,
    AboveMaximum,
}

impl From<RuleSide> for BoundViolation {
    fn from(side: RuleSide) -> Self {
        match side {
            RuleSide::Min => BoundViolation::BelowMinimum,
            RuleSide::Max => BoundViolation::AboveMaximum,
        }
    }
}

/// One value outside its column's domain rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyViolation {
    pub row: usize,
    pub column: String,
    pub field: Field,
    pub value: f64,
    /// Violated bound, rendered as `min=..` or `max=..`.
    pub rule: String,
    pub bound: f64,
    #[serde(rename = "type")]
    pub kind: BoundViolation,
}

/// Share of ruled numeric values that satisfy their rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyMetric {
    /// Percentage in [0, 100]; 100 when nothing was checked.
    pub score: f64,
    pub checked_values: usize,
    /// Total out-of-bounds values, uncapped.
    pub invalid_values: usize,
    pub columns_checked: Vec<String>,
    /// Sample of violations, capped per column and rule side.
    pub violations: Vec<AccuracyViolation>,
}

/// Kind of consistency issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    NumericAsString,
}

/// A column flagged as inconsistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyIssue {
    pub column: String,
    pub issue: IssueKind,
    pub message: String,
}

/// Share of columns whose storage matches their content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyMetric {
    pub score: f64,
    pub total_columns: usize,
    pub issues: Vec<ConsistencyIssue>,
}

/// Share of rows that are not duplicates of an earlier row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniquenessMetric {
    pub score: f64,
    pub total_rows: usize,
    pub unique_rows: usize,
    pub duplicate_rows: usize,
    /// First indices of rows belonging to a duplicate group, ascending.
    pub duplicate_indices: Vec<usize>,
}

/// All four metrics plus the weighted composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub completeness: CompletenessMetric,
    pub accuracy: AccuracyMetric,
    pub consistency: ConsistencyMetric,
    pub uniqueness: UniquenessMetric,
    /// Weighted sum rounded to one decimal.
    pub overall_score: f64,
}

impl QualityMetrics {
    /// Score of one dimension.
    pub fn score(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::Completeness => self.completeness.score,
            MetricKind::Accuracy => self.accuracy.score,
            MetricKind::Consistency => self.consistency.score,
            MetricKind::Uniqueness => self.uniqueness.score,
        }
    }
}

/// `part / whole × 100`, or `empty` when `whole` is zero.
pub(crate) fn ratio_score(part: usize, whole: usize, empty: f64) -> f64 {
    if whole == 0 {
        empty
    } else {
        (part as f64 * 100.0 / whole as f64).clamp(0.0, 100.0)
    }
}

/// Round to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
