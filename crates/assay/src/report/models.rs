//! The quality report value and its persistence.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::anomaly::AnomalyReport;
use crate::config::{QualityWeights, SampleLimits};
use crate::error::{AssayError, Result};
use crate::profile::Profile;
use crate::quality::QualityMetrics;

use super::level::QualityLevel;
use super::recommendation::Recommendation;
use super::render;

/// Identifying information at the top of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportHeader {
    pub dataset_name: String,
    pub rows: usize,
    pub columns: usize,
    pub generated_at: DateTime<Utc>,
}

/// A complete, immutable quality report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub header: ReportHeader,
    pub profile: Profile,
    pub metrics: QualityMetrics,
    pub anomalies: AnomalyReport,
    pub recommendations: Vec<Recommendation>,
    /// Weights the composite score was computed with.
    pub weights: QualityWeights,
    /// Sample caps applied when rendering.
    pub limits: SampleLimits,
    /// Narrative summary from a summarizer, when one was available.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub narrative: Option<String>,
}

impl QualityReport {
    /// Level of the composite score.
    pub fn level(&self) -> QualityLevel {
        QualityLevel::from_score(self.metrics.overall_score)
    }

    /// Render as fixed-width text.
    pub fn render_text(&self) -> String {
        self.to_string()
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render in the given format.
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => self.to_json(),
        }
    }

    /// Default file name, derived from the generation timestamp.
    pub fn file_name(&self, format: ReportFormat) -> String {
        format!(
            "quality_report_{}.{}",
            self.header.generated_at.format("%Y%m%d_%H%M%S"),
            format.extension()
        )
    }

    /// Write the report into `dir`, creating it if needed, and return the file path.
    pub fn save(&self, dir: impl AsRef<Path>, format: ReportFormat) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| AssayError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = dir.join(self.file_name(format));
        self.write_to(&path, format)?;
        Ok(path)
    }

    /// Write the report to an explicit path.
    pub fn write_to(&self, path: impl AsRef<Path>, format: ReportFormat) -> Result<()> {
        let path = path.as_ref();
        let body = self.render(format)?;
        fs::write(path, body).map_err(|e| AssayError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::info!(path = %path.display(), "report saved");
        Ok(())
    }
}

impl fmt::Display for QualityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_report(self, f)
    }
}

/// Output format of a persisted report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = AssayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(AssayError::InvalidInput(format!(
                "unknown report format '{}'",
                other
            ))),
        }
    }
}
