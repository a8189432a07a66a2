//! Accuracy scoring against domain rules.

use crate::input::Dataset;
use crate::rules::{DomainRuleSet, RuleSide};

use super::models::{ratio_score, AccuracyMetric, AccuracyViolation, BoundViolation};

/// Percentage of ruled numeric values that satisfy their rule.
///
/// Columns without a matching rule are ignored. When nothing is checked the
/// score is 100. Violation records are capped at `cap` per column and side;
/// `invalid_values` always carries the full count.
pub fn check_accuracy(dataset: &Dataset, rules: &DomainRuleSet, cap: usize) -> AccuracyMetric {
    let mut checked_values = 0;
    let mut invalid_values = 0;
    let mut columns_checked = Vec::new();
    let mut violations = Vec::new();

    for matched in rules.matched_columns(dataset) {
        let values = dataset.numeric_values(matched.index);
        checked_values += values.len();
        columns_checked.push(matched.name.clone());

        for side in [RuleSide::Min, RuleSide::Max] {
            let Some(bound) = matched.rule.bound(side) else {
                continue;
            };

            let offending: Vec<(usize, f64)> = values
                .iter()
                .copied()
                .filter(|&(_, v)| matched.rule.violated_side(v) == Some(side))
                .collect();
            invalid_values += offending.len();

            let prefix = match side {
                RuleSide::Min => "min",
                RuleSide::Max => "max",
            };
            violations.extend(offending.into_iter().take(cap).map(|(row, value)| {
                AccuracyViolation {
                    row,
                    column: matched.name.clone(),
                    field: matched.field,
                    value,
                    rule: format!("{}={}", prefix, bound),
                    bound,
                    kind: BoundViolation::from(side),
                }
            }));
        }
    }

    if invalid_values > 0 {
        tracing::debug!(invalid_values, checked_values, "accuracy violations found");
    }

    AccuracyMetric {
        score: ratio_score(checked_values - invalid_values, checked_values, 100.0),
        checked_values,
        invalid_values,
        columns_checked,
        violations,
    }
}
