//! Analysis configuration.
//!
//! Every tunable of the pipeline lives here: composite-score weights, anomaly
//! detector thresholds, domain-rule settings and the sample caps used when
//! recording and rendering findings. Configuration is checked once, when a
//! component is constructed, and never again during analysis.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AssayError, ConfigError, Result};
use crate::quality::MetricKind;
use crate::rules::DomainRuleConfig;

/// Tolerance used when checking that weights sum to one.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Weights of the composite quality score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityWeights {
    pub completeness: f64,
    pub accuracy: f64,
    pub consistency: f64,
    pub uniqueness: f64,
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            completeness: 0.4,
            accuracy: 0.3,
            consistency: 0.2,
            uniqueness: 0.1,
        }
    }
}

impl QualityWeights {
    /// Create weights; call [`validate`](Self::validate) before use.
    pub fn new(completeness: f64, accuracy: f64, consistency: f64, uniqueness: f64) -> Self {
        Self {
            completeness,
            accuracy,
            consistency,
            uniqueness,
        }
    }

    /// Weight of one dimension.
    pub fn weight(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::Completeness => self.completeness,
            MetricKind::Accuracy => self.accuracy,
            MetricKind::Consistency => self.consistency,
            MetricKind::Uniqueness => self.uniqueness,
        }
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        MetricKind::ALL.iter().map(|&k| self.weight(k)).sum()
    }

    /// Each weight must lie in [0, 1] and the sum must be 1.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for kind in MetricKind::ALL {
            let value = self.weight(kind);
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::WeightRange {
                    name: kind.as_str(),
                    value,
                });
            }
        }
        let total = self.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum(total));
        }
        Ok(())
    }
}

/// Statistical detector settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyConfig {
    /// Absolute z-score above which a value is flagged.
    pub z_score_threshold: f64,
    /// Fence multiplier applied to the interquartile range.
    pub iqr_multiplier: f64,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            z_score_threshold: 3.0,
            iqr_multiplier: 1.5,
        }
    }
}

impl AnomalyConfig {
    /// Creates a new anomaly config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the z-score threshold.
    pub fn with_z_score_threshold(mut self, threshold: f64) -> Self {
        self.z_score_threshold = threshold;
        self
    }

    /// Builder method to set the IQR multiplier.
    pub fn with_iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.iqr_multiplier = multiplier;
        self
    }

    /// Both thresholds must be positive and finite.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !(self.z_score_threshold.is_finite() && self.z_score_threshold > 0.0) {
            return Err(ConfigError::ZScoreThreshold(self.z_score_threshold));
        }
        if !(self.iqr_multiplier.is_finite() && self.iqr_multiplier > 0.0) {
            return Err(ConfigError::IqrMultiplier(self.iqr_multiplier));
        }
        Ok(())
    }
}

/// Caps on how many findings are recorded or rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleLimits {
    /// Accuracy violation records kept per rule side.
    pub violations_per_side: usize,
    /// Duplicate row indices reported by the uniqueness check.
    pub duplicate_indices: usize,
    /// Z-score anomalies shown in the text report.
    pub z_score: usize,
    /// Domain-rule anomalies shown in the text report.
    pub domain_rules: usize,
    /// IQR anomalies shown in the text report.
    pub iqr: usize,
    /// Column names listed in the overview.
    pub column_names: usize,
}

impl Default for SampleLimits {
    fn default() -> Self {
        Self {
            violations_per_side: 5,
            duplicate_indices: 10,
            z_score: 5,
            domain_rules: 5,
            iqr: 3,
            column_names: 5,
        }
    }
}

/// Complete configuration for an analysis run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub weights: QualityWeights,
    pub anomaly: AnomalyConfig,
    pub domain_rules: DomainRuleConfig,
    pub limits: SampleLimits,
}

impl AnalysisConfig {
    /// Creates a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON configuration file. Missing keys take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| AssayError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AnalysisConfig = serde_json::from_str(&text)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded analysis config");
        Ok(config)
    }

    pub fn with_weights(mut self, weights: QualityWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_anomaly(mut self, anomaly: AnomalyConfig) -> Self {
        self.anomaly = anomaly;
        self
    }

    pub fn with_domain_rules(mut self, domain_rules: DomainRuleConfig) -> Self {
        self.domain_rules = domain_rules;
        self
    }

    pub fn with_limits(mut self, limits: SampleLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Validates every section.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.weights.validate()?;
        self.anomaly.validate()?;
        self.domain_rules.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::TemperatureUnit;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = QualityWeights::default();
        assert!((weights.total() - 1.0).abs() < 1e-12);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_weight_sum_rejected() {
        let weights = QualityWeights::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(weights.validate(), Err(ConfigError::WeightSum(2.0)));
    }

    #[test]
    fn test_weight_range_rejected() {
        let weights = QualityWeights::new(1.2, -0.2, 0.0, 0.0);
        assert!(matches!(
            weights.validate(),
            Err(ConfigError::WeightRange {
                name: "completeness",
                ..
            })
        ));
    }

    #[test]
    fn test_anomaly_thresholds() {
        assert!(AnomalyConfig::default().validate().is_ok());
        assert_eq!(
            AnomalyConfig::new().with_z_score_threshold(0.0).validate(),
            Err(ConfigError::ZScoreThreshold(0.0))
        );
        assert_eq!(
            AnomalyConfig::new().with_iqr_multiplier(-1.5).validate(),
            Err(ConfigError::IqrMultiplier(-1.5))
        );
        assert!(
            AnomalyConfig::new()
                .with_z_score_threshold(f64::NAN)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_default_limits() {
        let limits = SampleLimits::default();
        assert_eq!(limits.violations_per_side, 5);
        assert_eq!(limits.duplicate_indices, 10);
        assert_eq!(limits.iqr, 3);
    }

    #[test]
    fn test_partial_json_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"anomaly": {{"z_score_threshold": 2.5}}, "domain_rules": {{"temperature_unit": "kelvin"}}}}"#
        )
        .unwrap();

        let config = AnalysisConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.anomaly.z_score_threshold, 2.5);
        assert_eq!(config.anomaly.iqr_multiplier, 1.5);
        assert_eq!(config.domain_rules.temperature_unit, TemperatureUnit::Kelvin);
        assert_eq!(config.weights, QualityWeights::default());
    }

    #[test]
    fn test_json_config_unknown_unit() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"domain_rules": {{"temperature_unit": "rankine"}}}}"#).unwrap();
        assert!(matches!(
            AnalysisConfig::from_json_file(file.path()),
            Err(AssayError::Json(_))
        ));
    }

    #[test]
    fn test_json_config_bad_weights() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"weights": {{"completeness": 0.9}}}}"#).unwrap();
        assert!(matches!(
            AnalysisConfig::from_json_file(file.path()),
            Err(AssayError::Config(ConfigError::WeightSum(_)))
        ));
    }
}
