//! Data quality scoring.
//!
//! Four independent dimensions, each a percentage in [0, 100]:
//! - **Completeness**: share of non-null cells
//! - **Accuracy**: share of ruled numeric values inside their domain rule
//! - **Consistency**: share of columns that are not numbers stored as text
//! - **Uniqueness**: share of rows that do not repeat an earlier row
//!
//! [`QualityChecker`] runs all four and combines them into a weighted
//! composite score.

mod accuracy;
mod checker;
mod completeness;
mod consistency;
mod models;
mod uniqueness;

pub use accuracy::check_accuracy;
pub use checker::QualityChecker;
pub use completeness::check_completeness;
pub use consistency::check_consistency;
pub use models::{
    AccuracyMetric, AccuracyViolation, BoundViolation, CompletenessMetric, ConsistencyIssue,
    ConsistencyMetric, IssueKind, MetricKind, QualityMetrics, UniquenessMetric,
};
pub use uniqueness::check_uniqueness;
