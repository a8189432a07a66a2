//! Consistency scoring: numbers stored as text.

use crate::input::Dataset;

use super::models::{ratio_score, ConsistencyIssue, ConsistencyMetric, IssueKind};

/// Percentage of columns that are not numeric-looking text.
///
/// A text column is inconsistent when it has at least one non-null value and
/// every non-null value parses as a number. Zero columns score 100.
pub fn check_consistency(dataset: &Dataset) -> ConsistencyMetric {
    let total_columns = dataset.column_count();

    let issues: Vec<ConsistencyIssue> = dataset
        .column_names()
        .iter()
        .enumerate()
        .filter(|&(idx, _)| is_numeric_as_string(dataset, idx))
        .map(|(_, name)| ConsistencyIssue {
            column: name.clone(),
            issue: IssueKind::NumericAsString,
            message: "Numeric data stored as string".to_string(),
        })
        .collect();

    ConsistencyMetric {
        score: ratio_score(total_columns - issues.len(), total_columns, 100.0),
        total_columns,
        issues,
    }
}

fn is_numeric_as_string(dataset: &Dataset, index: usize) -> bool {
    if dataset.column_class(index).is_numeric() {
        return false;
    }
    let mut present = dataset.column_values(index).filter(|v| !v.is_null()).peekable();
    present.peek().is_some() && present.all(|v| v.coerce_number().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Value;

    #[test]
    fn test_numeric_strings_flagged() {
        let ds = Dataset::from_columns(vec![
            ("ph", vec![Value::Number(7.0), Value::Number(7.1)]),
            ("batch", vec![Value::text("101"), Value::text("102")]),
            ("operator", vec![Value::text("alice"), Value::text("bob")]),
            ("lot", vec![Value::text("12"), Value::text("A7")]),
        ])
        .unwrap();

        let metric = check_consistency(&ds);
        assert_eq!(metric.total_columns, 4);
        assert_eq!(metric.issues.len(), 1);
        assert_eq!(metric.issues[0].column, "batch");
        assert_eq!(metric.issues[0].issue, IssueKind::NumericAsString);
        assert_eq!(metric.score, 75.0);
    }

    #[test]
    fn test_all_null_column_is_consistent() {
        let ds = Dataset::from_columns(vec![("notes", vec![Value::Null, Value::Null])]).unwrap();
        assert_eq!(check_consistency(&ds).score, 100.0);
    }

    #[test]
    fn test_no_columns() {
        let ds = Dataset::new(vec![], vec![]).unwrap();
        let metric = check_consistency(&ds);
        assert_eq!(metric.score, 100.0);
        assert_eq!(metric.total_columns, 0);
    }
}
