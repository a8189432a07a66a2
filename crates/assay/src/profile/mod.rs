//! Dataset profiling: shape, per-column statistics, missingness, types and
//! correlations.

mod models;
mod profiler;
pub mod stats;

pub use models::{
    ColumnMissing, ColumnProfile, CorrelationMatrix, MissingSummary, NumericProfile,
    NumericSummary, Overview, Profile, StatisticsSummary, TypeDistribution, NO_NUMERIC_COLUMNS,
};
pub use profiler::Profiler;
