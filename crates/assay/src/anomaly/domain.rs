//! Domain-rule violation detection.

use crate::input::Dataset;
use crate::rules::{DomainRuleSet, ViolationKind};

use super::detector::Detector;
use super::models::{AnomalyRecord, DetectionMethod, Evidence};

/// Flags ruled values outside their field's bounds.
///
/// The temperature ceiling is left to the accuracy score.
#[derive(Debug, Clone, Default)]
pub struct DomainRuleDetector {
    rules: DomainRuleSet,
}

impl DomainRuleDetector {
    pub fn new(rules: DomainRuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &DomainRuleSet {
        &self.rules
    }
}

impl Detector for DomainRuleDetector {
    fn method(&self) -> DetectionMethod {
        DetectionMethod::DomainRules
    }

    fn threshold(&self) -> Option<f64> {
        None
    }

    fn detect(&self, dataset: &Dataset) -> Vec<AnomalyRecord> {
        let mut anomalies = Vec::new();

        for matched in self.rules.matched_columns(dataset) {
            let rule_text = self.rules.describe(matched.field);
            for (row, value) in dataset.numeric_values(matched.index) {
                let Some(violation) = matched
                    .rule
                    .violated_side(value)
                    .and_then(|side| ViolationKind::classify(matched.field, side))
                else {
                    continue;
                };
                anomalies.push(AnomalyRecord {
                    row,
                    column: matched.name.clone(),
                    value,
                    method: DetectionMethod::DomainRules,
                    evidence: Evidence::DomainRule {
                        field: matched.field,
                        rule: rule_text.clone(),
                        violation,
                    },
                });
            }
        }

        anomalies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{DomainRuleConfig, TemperatureUnit};

    fn violation(record: &AnomalyRecord) -> ViolationKind {
        match &record.evidence {
            Evidence::DomainRule { violation, .. } => *violation,
            other => panic!("unexpected evidence {:?}", other),
        }
    }

    #[test]
    fn test_invalid_ph() {
        let ds = Dataset::from_columns(vec![("pH", vec![7.4, 15.5, 7.0])]).unwrap();
        let anomalies = DomainRuleDetector::default().detect(&ds);
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].row, 1);
        assert_eq!(anomalies[0].value, 15.5);
        assert_eq!(violation(&anomalies[0]), ViolationKind::InvalidPh);
    }

    #[test]
    fn test_temperature_and_concentration() {
        let ds = Dataset::from_columns(vec![
            ("temperature", vec![25.0, -300.0, 1500.0]),
            ("concentration", vec![0.5, -0.1, 0.0]),
        ])
        .unwrap();

        let anomalies = DomainRuleDetector::default().detect(&ds);
        let kinds: Vec<ViolationKind> = anomalies.iter().map(violation).collect();
        assert_eq!(
            kinds,
            vec![ViolationKind::BelowAbsoluteZero, ViolationKind::NegativeConcentration]
        );
    }

    #[test]
    fn test_temperature_ceiling_not_an_anomaly() {
        let ds = Dataset::from_columns(vec![("temperature", vec![25.0, 1500.0, 5000.0])]).unwrap();
        assert!(DomainRuleDetector::default().detect(&ds).is_empty());

        let accuracy = crate::quality::check_accuracy(&ds, &DomainRuleSet::default(), 5);
        assert_eq!(accuracy.invalid_values, 2);
    }

    #[test]
    fn test_kelvin_floor() {
        let config = DomainRuleConfig::default().with_temperature_unit(TemperatureUnit::Kelvin);
        let detector = DomainRuleDetector::new(DomainRuleSet::from_config(&config).unwrap());
        let ds = Dataset::from_columns(vec![("temp", vec![-5.0, 300.0])]).unwrap();

        let anomalies = detector.detect(&ds);
        assert_eq!(anomalies.len(), 1);
        match &anomalies[0].evidence {
            Evidence::DomainRule { rule, .. } => assert_eq!(rule, "Temperature must be 0-1273.15K"),
            other => panic!("unexpected evidence {:?}", other),
        }
    }
}
