//! Anomaly records and per-method results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rules::{Field, ViolationKind};

/// Detection strategy that produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    ZScore,
    Iqr,
    DomainRules,
}

impl DetectionMethod {
    /// Stable identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMethod::ZScore => "z_score",
            DetectionMethod::Iqr => "iqr",
            DetectionMethod::DomainRules => "domain_rules",
        }
    }
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which fence an IQR outlier crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Below,
    Above,
}

/// Method-specific evidence attached to a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Evidence {
    ZScore {
        /// Signed distance from the mean in standard deviations.
        z_score: f64,
        mean: f64,
        std: f64,
    },
    Iqr {
        q1: f64,
        q3: f64,
        iqr: f64,
        lower_bound: f64,
        upper_bound: f64,
        direction: Direction,
    },
    DomainRule {
        field: Field,
        rule: String,
        violation: ViolationKind,
    },
}

/// One flagged value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    pub row: usize,
    pub column: String,
    pub value: f64,
    pub method: DetectionMethod,
    pub evidence: Evidence,
}

/// Output of one detection method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodResult {
    pub method: DetectionMethod,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub threshold: Option<f64>,
    pub anomalies: Vec<AnomalyRecord>,
    pub count: usize,
}

impl MethodResult {
    pub fn new(method: DetectionMethod, threshold: Option<f64>, anomalies: Vec<AnomalyRecord>) -> Self {
        Self {
            method,
            threshold,
            count: anomalies.len(),
            anomalies,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.anomalies.is_empty()
    }
}

/// Results of all three detectors.
///
/// Methods run independently; the same cell may appear under several of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyReport {
    pub z_score: MethodResult,
    pub iqr: MethodResult,
    pub domain_rules: MethodResult,
}

impl AnomalyReport {
    /// Sum of the per-method counts, overlaps included.
    pub fn total(&self) -> usize {
        self.z_score.count + self.iqr.count + self.domain_rules.count
    }

    /// Results in report order.
    pub fn methods(&self) -> [&MethodResult; 3] {
        [&self.z_score, &self.iqr, &self.domain_rules]
    }
}
