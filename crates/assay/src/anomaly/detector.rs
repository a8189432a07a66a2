//! The detector trait and the three-method facade.

use crate::config::AnalysisConfig;
use crate::error::ConfigError;
use crate::input::Dataset;
use crate::rules::DomainRuleSet;

use super::domain::DomainRuleDetector;
use super::iqr::IqrDetector;
use super::models::{AnomalyRecord, AnomalyReport, DetectionMethod, MethodResult};
use super::zscore::ZScoreDetector;

/// An independent anomaly detection strategy.
pub trait Detector: Send + Sync {
    /// Identifier of the strategy.
    fn method(&self) -> DetectionMethod;

    /// Threshold in effect, if the strategy has one.
    fn threshold(&self) -> Option<f64>;

    /// Flag anomalous values, ordered by column then row.
    fn detect(&self, dataset: &Dataset) -> Vec<AnomalyRecord>;

    /// Run the detector and wrap its output.
    fn run(&self, dataset: &Dataset) -> MethodResult {
        MethodResult::new(self.method(), self.threshold(), self.detect(dataset))
    }
}

/// Runs the z-score, IQR and domain-rule detectors.
#[derive(Debug, Clone, Default)]
pub struct AnomalyDetector {
    z_score: ZScoreDetector,
    iqr: IqrDetector,
    domain: DomainRuleDetector,
}

impl AnomalyDetector {
    /// Creates a detector with default thresholds and canonical rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detector from a configuration, rejecting invalid thresholds or rules.
    pub fn with_config(config: &AnalysisConfig) -> Result<Self, ConfigError> {
        config.anomaly.validate()?;
        Ok(Self {
            z_score: ZScoreDetector::new(config.anomaly.z_score_threshold),
            iqr: IqrDetector::new(config.anomaly.iqr_multiplier),
            domain: DomainRuleDetector::new(DomainRuleSet::from_config(&config.domain_rules)?),
        })
    }

    pub fn detect_zscore(&self, dataset: &Dataset) -> MethodResult {
        self.z_score.run(dataset)
    }

    pub fn detect_iqr(&self, dataset: &Dataset) -> MethodResult {
        self.iqr.run(dataset)
    }

    pub fn detect_domain_violations(&self, dataset: &Dataset) -> MethodResult {
        self.domain.run(dataset)
    }

    /// Run all three methods.
    pub fn detect_all_anomalies(&self, dataset: &Dataset) -> AnomalyReport {
        let report = AnomalyReport {
            z_score: self.detect_zscore(dataset),
            iqr: self.detect_iqr(dataset),
            domain_rules: self.detect_domain_violations(dataset),
        };

        tracing::debug!(
            z_score = report.z_score.count,
            iqr = report.iqr.count,
            domain_rules = report.domain_rules.count,
            "detected anomalies"
        );

        report
    }
}
