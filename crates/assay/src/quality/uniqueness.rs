//! Uniqueness scoring: exact duplicate rows.

use std::collections::HashMap;

use crate::input::{CellKey, Dataset};

use super::models::{ratio_score, UniquenessMetric};

/// Percentage of rows that do not repeat an earlier row.
///
/// Rows compare equal when every cell is equal, nulls included. Reports the
/// first `cap` indices of rows that belong to any duplicate group, the first
/// occurrence included. Zero rows score 100.
pub fn check_uniqueness(dataset: &Dataset, cap: usize) -> UniquenessMetric {
    let total_rows = dataset.row_count();

    let mut groups: HashMap<Vec<CellKey<'_>>, Vec<usize>> = HashMap::with_capacity(total_rows);
    for (idx, row) in dataset.rows().iter().enumerate() {
        let key: Vec<CellKey<'_>> = row.iter().map(|v| v.key()).collect();
        groups.entry(key).or_default().push(idx);
    }

    let unique_rows = groups.len();
    let duplicate_rows = total_rows - unique_rows;

    let mut duplicate_indices: Vec<usize> = groups
        .into_values()
        .filter(|members| members.len() > 1)
        .flatten()
        .collect();
    duplicate_indices.sort_unstable();
    duplicate_indices.truncate(cap);

    UniquenessMetric {
        score: ratio_score(unique_rows, total_rows, 100.0),
        total_rows,
        unique_rows,
        duplicate_rows,
        duplicate_indices,
    }
}
