//! Structural profiling of a dataset.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::input::{ColumnType, Dataset};

use super::models::{
    ColumnMissing, ColumnProfile, CorrelationMatrix, MissingSummary, NumericProfile,
    NumericSummary, Overview, Profile, StatisticsSummary, TypeDistribution, NO_NUMERIC_COLUMNS,
};
use super::stats;

/// Computes descriptive profiles. Stateless; every call recomputes from the dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct Profiler;

impl Profiler {
    pub fn new() -> Self {
        Self
    }

    /// Build the full profile of a dataset.
    pub fn generate_profile(&self, dataset: &Dataset) -> Profile {
        let columns = self.profile_columns(dataset);

        let profile = Profile {
            overview: Overview {
                rows: dataset.row_count(),
                columns: dataset.column_count(),
                memory_bytes: dataset.approximate_memory_bytes(),
                column_names: dataset.column_names().to_vec(),
            },
            missing_values: missing_summary(dataset, &columns),
            data_types: type_distribution(&columns),
            statistics: self.statistics(dataset),
            columns,
        };

        tracing::debug!(
            rows = profile.overview.rows,
            columns = profile.overview.columns,
            missing = profile.missing_values.total_missing,
            "generated profile"
        );

        profile
    }

    /// Profile every column in order.
    pub fn profile_columns(&self, dataset: &Dataset) -> IndexMap<String, ColumnProfile> {
        dataset
            .column_names()
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), self.profile_column(dataset, idx)))
            .collect()
    }

    /// Profile one column by index.
    pub fn profile_column(&self, dataset: &Dataset, index: usize) -> ColumnProfile {
        let rows = dataset.row_count();
        let non_null_count = dataset.non_null_count(index);
        let null_count = rows - non_null_count;

        let distinct_count = dataset
            .column_values(index)
            .filter(|v| !v.is_null())
            .map(|v| v.key())
            .collect::<HashSet<_>>()
            .len();

        let numeric = dataset.column_class(index).is_numeric().then(|| {
            let values: Vec<f64> = dataset
                .numeric_values(index)
                .into_iter()
                .map(|(_, v)| v)
                .collect();
            NumericProfile {
                mean: stats::mean(&values),
                median: stats::median(&values),
                std: stats::sample_std(&values),
                min: values.iter().copied().reduce(f64::min),
                max: values.iter().copied().reduce(f64::max),
            }
        });

        ColumnProfile {
            dtype: dataset.column_type(index),
            non_null_count,
            null_count,
            null_percentage: percentage(null_count, rows),
            distinct_count,
            distinct_percentage: percentage(distinct_count, rows),
            numeric,
        }
    }

    /// Describe table and correlation matrix over numeric columns.
    pub fn statistics(&self, dataset: &Dataset) -> StatisticsSummary {
        let numeric: Vec<(String, Vec<(usize, f64)>)> = dataset
            .numeric_columns()
            .into_iter()
            .map(|idx| {
                (
                    dataset.column_names()[idx].clone(),
                    dataset.numeric_values(idx),
                )
            })
            .collect();

        if numeric.is_empty() {
            return StatisticsSummary::NoNumericColumns {
                message: NO_NUMERIC_COLUMNS.to_string(),
            };
        }

        let describe = numeric
            .iter()
            .filter_map(|(name, values)| {
                let raw: Vec<f64> = values.iter().map(|(_, v)| *v).collect();
                NumericSummary::from_values(&raw).map(|s| (name.clone(), s))
            })
            .collect();

        let correlation = (numeric.len() >= 2).then(|| correlation_matrix(dataset.row_count(), &numeric));

        StatisticsSummary::Numeric {
            describe,
            correlation,
        }
    }
}

// =============================================================================
// SECTION BUILDERS
// =============================================================================

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

fn missing_summary(dataset: &Dataset, columns: &IndexMap<String, ColumnProfile>) -> MissingSummary {
    let total_cells = dataset.cell_count();
    let total_missing: usize = columns.values().map(|c| c.null_count).sum();

    let by_column = columns
        .iter()
        .filter(|(_, c)| c.null_count > 0)
        .map(|(name, c)| {
            (
                name.clone(),
                ColumnMissing {
                    count: c.null_count,
                    percentage: c.null_percentage,
                },
            )
        })
        .collect();

    MissingSummary {
        total_missing,
        total_cells,
        missing_percentage: percentage(total_missing, total_cells),
        by_column,
    }
}

fn type_distribution(columns: &IndexMap<String, ColumnProfile>) -> TypeDistribution {
    let mut counts: IndexMap<ColumnType, usize> = IndexMap::new();
    let mut numeric_columns = Vec::new();
    let mut text_columns = Vec::new();

    for (name, column) in columns {
        *counts.entry(column.dtype).or_insert(0) += 1;
        if column.numeric.is_some() {
            numeric_columns.push(name.clone());
        } else {
            text_columns.push(name.clone());
        }
    }

    counts.sort_keys();

    TypeDistribution {
        counts,
        numeric_columns,
        text_columns,
    }
}

/// Pairwise-complete Pearson matrix.
fn correlation_matrix(rows: usize, numeric: &[(String, Vec<(usize, f64)>)]) -> CorrelationMatrix {
    // Dense per-row view so pairs can be aligned by row index
    let dense: Vec<Vec<Option<f64>>> = numeric
        .iter()
        .map(|(_, values)| {
            let mut column = vec![None; rows];
            for &(row, v) in values {
                column[row] = Some(v);
            }
            column
        })
        .collect();

    let n = numeric.len();
    let mut values = vec![vec![None; n]; n];
    for i in 0..n {
        for j in i..n {
            let pairs: Vec<(f64, f64)> = dense[i]
                .iter()
                .zip(&dense[j])
                .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
                .collect();
            let r = stats::pearson(&pairs);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix {
        columns: numeric.iter().map(|(name, _)| name.clone()).collect(),
        values,
    }
}
