//! Quality level thresholds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bucket of a composite quality score.
///
/// This is the only place score thresholds are defined; the quality box,
/// the verdict recommendation and the CLI colouring all go through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QualityLevel {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl QualityLevel {
    /// Lower bounds (inclusive), best level first.
    const LADDER: [(f64, QualityLevel); 3] = [
        (90.0, QualityLevel::Excellent),
        (75.0, QualityLevel::Good),
        (60.0, QualityLevel::Fair),
    ];

    /// Classify a composite score.
    pub fn from_score(score: f64) -> Self {
        Self::LADDER
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, level)| *level)
            .unwrap_or(QualityLevel::Poor)
    }

    pub fn label(&self) -> &'static str {
        match self {
            QualityLevel::Excellent => "EXCELLENT",
            QualityLevel::Good => "GOOD",
            QualityLevel::Fair => "FAIR",
            QualityLevel::Poor => "POOR",
        }
    }

    /// Status marker shown next to the label.
    pub fn marker(&self) -> &'static str {
        match self {
            QualityLevel::Excellent => "✓✓",
            QualityLevel::Good => "✓",
            QualityLevel::Fair => "⚠",
            QualityLevel::Poor => "✗",
        }
    }

    /// Closing advice for the recommendations list.
    pub fn verdict(&self) -> &'static str {
        match self {
            QualityLevel::Excellent => "Proceed with confidence",
            QualityLevel::Good => "Minor issues to address",
            QualityLevel::Fair => "Significant improvements needed",
            QualityLevel::Poor => "Major data cleaning required",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.marker())
    }
}
