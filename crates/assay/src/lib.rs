//! Assay: quality profiling, scoring and anomaly detection for laboratory datasets.
//!
//! Assay reads a tabular dataset once and produces an immutable quality report:
//! a descriptive profile, four weighted quality scores, anomalies found by
//! three independent detectors, and ordered recommendations.
//!
//! # Core Principles
//!
//! - **Read-only**: The dataset is never modified
//! - **Degenerate-safe**: Empty or constant columns are skipped, never errors
//! - **Fail-fast configuration**: Invalid weights, thresholds or units are rejected at setup
//!
//! # Example
//!
//! ```no_run
//! use assay::Assay;
//!
//! let assay = Assay::new();
//! let (report, _source) = assay.analyze("plate_reader.csv", None).unwrap();
//!
//! println!("Overall score: {:.1}", report.metrics.overall_score);
//! println!("{}", report);
//! ```

pub mod anomaly;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod profile;
pub mod quality;
pub mod report;
pub mod rules;
pub mod summarize;

mod assay;

pub use crate::assay::Assay;
pub use anomaly::{AnomalyDetector, AnomalyRecord, AnomalyReport, DetectionMethod, Evidence};
pub use config::{AnalysisConfig, AnomalyConfig, QualityWeights, SampleLimits};
pub use error::{AssayError, ConfigError, Result};
pub use input::{Dataset, Parser, ParserConfig, SourceFormat, SourceMetadata, Value};
pub use profile::{Profile, Profiler};
pub use quality::{QualityChecker, QualityMetrics};
pub use report::{QualityLevel, QualityReport, Recommendation, ReportFormat, ReportGenerator};
pub use rules::{DomainRuleConfig, DomainRuleSet, MatchMode, TemperatureUnit};
pub use summarize::{MockSummarizer, Summarizer, SummarizerChoice, SummaryMode};
