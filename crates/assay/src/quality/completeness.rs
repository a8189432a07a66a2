//! Completeness scoring.

use crate::input::Dataset;

use super::models::{ratio_score, CompletenessMetric};

/// Percentage of non-null cells, dataset-wide and per column.
///
/// A dataset without cells scores 0.
pub fn check_completeness(dataset: &Dataset) -> CompletenessMetric {
    let rows = dataset.row_count();
    let mut non_null_cells = 0;

    let by_column = dataset
        .column_names()
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let present = dataset.non_null_count(idx);
            non_null_cells += present;
            (name.clone(), ratio_score(present, rows, 0.0))
        })
        .collect();

    let total_cells = dataset.cell_count();
    CompletenessMetric {
        score: ratio_score(non_null_cells, total_cells, 0.0),
        total_cells,
        non_null_cells,
        missing_cells: total_cells - non_null_cells,
        by_column,
    }
}
