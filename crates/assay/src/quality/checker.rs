//! Quality checker facade.

use crate::config::{AnalysisConfig, QualityWeights, SampleLimits};
use crate::error::ConfigError;
use crate::input::Dataset;
use crate::rules::DomainRuleSet;

use super::accuracy::check_accuracy;
use super::completeness::check_completeness;
use super::consistency::check_consistency;
use super::models::{round1, MetricKind, QualityMetrics};
use super::uniqueness::check_uniqueness;

/// Scores the four quality dimensions and their weighted composite.
///
/// Never fails on degenerate input: empty datasets and datasets without
/// ruled columns fall back to the documented default scores.
#[derive(Debug, Clone)]
pub struct QualityChecker {
    weights: QualityWeights,
    rules: DomainRuleSet,
    limits: SampleLimits,
}

impl Default for QualityChecker {
    fn default() -> Self {
        Self {
            weights: QualityWeights::default(),
            rules: DomainRuleSet::default(),
            limits: SampleLimits::default(),
        }
    }
}

impl QualityChecker {
    /// Creates a checker with default weights and canonical rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a checker from a configuration, rejecting invalid weights or rules.
    pub fn with_config(config: &AnalysisConfig) -> Result<Self, ConfigError> {
        config.weights.validate()?;
        Ok(Self {
            weights: config.weights,
            rules: DomainRuleSet::from_config(&config.domain_rules)?,
            limits: config.limits,
        })
    }

    /// Returns the composite weights.
    pub fn weights(&self) -> &QualityWeights {
        &self.weights
    }

    /// Compute all four metrics and the composite score.
    pub fn calculate_all_metrics(&self, dataset: &Dataset) -> QualityMetrics {
        let completeness = check_completeness(dataset);
        let accuracy = check_accuracy(dataset, &self.rules, self.limits.violations_per_side);
        let consistency = check_consistency(dataset);
        let uniqueness = check_uniqueness(dataset, self.limits.duplicate_indices);

        let mut metrics = QualityMetrics {
            completeness,
            accuracy,
            consistency,
            uniqueness,
            overall_score: 0.0,
        };
        metrics.overall_score = self.overall_score(&metrics);

        tracing::debug!(
            completeness = metrics.completeness.score,
            accuracy = metrics.accuracy.score,
            consistency = metrics.consistency.score,
            uniqueness = metrics.uniqueness.score,
            overall = metrics.overall_score,
            "calculated quality metrics"
        );

        metrics
    }

    /// Weighted sum of the four scores, rounded to one decimal.
    fn overall_score(&self, metrics: &QualityMetrics) -> f64 {
        let weighted: f64 = MetricKind::ALL
            .iter()
            .map(|&kind| metrics.score(kind) * self.weights.weight(kind))
            .sum();
        round1(weighted.clamp(0.0, 100.0))
    }
}
