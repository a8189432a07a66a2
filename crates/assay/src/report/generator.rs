//! Report assembly.

use std::sync::Arc;

use chrono::Utc;

use crate::anomaly::AnomalyDetector;
use crate::config::{AnalysisConfig, QualityWeights, SampleLimits};
use crate::error::Result;
use crate::input::Dataset;
use crate::profile::Profiler;
use crate::quality::QualityChecker;
use crate::summarize::{Availability, Summarizer, SummaryMode};

use super::models::{QualityReport, ReportHeader};
use super::recommendation::derive_recommendations;

/// Runs the profiler, quality checker and anomaly detector once each and
/// assembles their results into a [`QualityReport`].
pub struct ReportGenerator {
    profiler: Profiler,
    checker: QualityChecker,
    detector: AnomalyDetector,
    weights: QualityWeights,
    limits: SampleLimits,
    summarizer: Option<Arc<dyn Summarizer>>,
    summary_mode: SummaryMode,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self {
            profiler: Profiler::new(),
            checker: QualityChecker::new(),
            detector: AnomalyDetector::new(),
            weights: QualityWeights::default(),
            limits: SampleLimits::default(),
            summarizer: None,
            summary_mode: SummaryMode::default(),
        }
    }
}

impl ReportGenerator {
    /// Create a generator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with custom configuration.
    ///
    /// The configuration is validated here; analysis itself never fails.
    pub fn with_config(config: &AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            profiler: Profiler::new(),
            checker: QualityChecker::with_config(config)?,
            detector: AnomalyDetector::with_config(config)?,
            weights: config.weights,
            limits: config.limits,
            summarizer: None,
            summary_mode: SummaryMode::default(),
        })
    }

    /// Attach a summarizer used to add a narrative to each report.
    pub fn with_summarizer(mut self, summarizer: Arc<dyn Summarizer>, mode: SummaryMode) -> Self {
        self.summarizer = Some(summarizer);
        self.summary_mode = mode;
        self
    }

    /// Generate the full report for a dataset.
    pub fn generate_full_report(&self, dataset: &Dataset, dataset_name: &str) -> QualityReport {
        tracing::info!(
            dataset = dataset_name,
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            "generating quality report"
        );

        let profile = self.profiler.generate_profile(dataset);
        let metrics = self.checker.calculate_all_metrics(dataset);
        let anomalies = self.detector.detect_all_anomalies(dataset);
        let recommendations = derive_recommendations(&metrics, &anomalies);

        let mut report = QualityReport {
            header: ReportHeader {
                dataset_name: dataset_name.to_string(),
                rows: dataset.row_count(),
                columns: dataset.column_count(),
                generated_at: Utc::now(),
            },
            profile,
            metrics,
            anomalies,
            recommendations,
            weights: self.weights,
            limits: self.limits,
            narrative: None,
        };

        report.narrative = self.narrative(&report);

        tracing::info!(
            dataset = dataset_name,
            score = report.metrics.overall_score,
            anomalies = report.anomalies.total(),
            "quality report complete"
        );

        report
    }

    /// Ask the summarizer for a narrative; failures degrade to `None`.
    fn narrative(&self, report: &QualityReport) -> Option<String> {
        let summarizer = self.summarizer.as_ref()?;

        if let Availability::Unavailable(reason) = summarizer.availability() {
            tracing::warn!(provider = summarizer.name(), %reason, "summarizer unavailable; skipping narrative");
            return None;
        }

        match summarizer.summarize(&report.render_text(), self.summary_mode) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!(provider = summarizer.name(), error = %e, "narrative summary failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssayError;
    use crate::input::Value;
    use crate::summarize::MockSummarizer;

    struct FailingSummarizer;

    impl Summarizer for FailingSummarizer {
        fn name(&self) -> &str {
            "failing"
        }

        fn availability(&self) -> Availability {
            Availability::Available
        }

        fn summarize(&self, _text: &str, _mode: SummaryMode) -> Result<String> {
            Err(AssayError::provider("failing", "boom"))
        }
    }

    struct OfflineSummarizer;

    impl Summarizer for OfflineSummarizer {
        fn name(&self) -> &str {
            "offline"
        }

        fn availability(&self) -> Availability {
            Availability::Unavailable("no key".to_string())
        }

        fn summarize(&self, _text: &str, _mode: SummaryMode) -> Result<String> {
            panic!("must not be called when unavailable");
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_columns(vec![
            ("sample", vec![Value::text("A"), Value::text("B"), Value::text("C"), Value::text("D")]),
            ("ph", vec![Value::Number(7.0), Value::Number(7.1), Value::Null, Value::Number(15.5)]),
        ])
        .unwrap()
    }

    #[test]
    fn test_report_contents() {
        let report = ReportGenerator::new().generate_full_report(&dataset(), "bench.csv");
        assert_eq!(report.header.dataset_name, "bench.csv");
        assert_eq!(report.header.rows, 4);
        assert_eq!(report.header.columns, 2);
        assert_eq!(report.anomalies.domain_rules.count, 1);
        assert!(report.narrative.is_none());
        assert!(!report.recommendations.is_empty());
    }

    #[test]
    fn test_mock_narrative_attached() {
        let generator = ReportGenerator::new()
            .with_summarizer(Arc::new(MockSummarizer::new()), SummaryMode::Concise);
        let report = generator.generate_full_report(&dataset(), "bench.csv");
        let narrative = report.narrative.as_deref().unwrap();
        assert!(narrative.starts_with("# Summary"));
        assert!(report.render_text().contains("NARRATIVE SUMMARY"));
    }

    #[test]
    fn test_summarizer_failure_is_not_fatal() {
        let generator =
            ReportGenerator::new().with_summarizer(Arc::new(FailingSummarizer), SummaryMode::Teaching);
        let report = generator.generate_full_report(&dataset(), "bench.csv");
        assert!(report.narrative.is_none());
    }

    #[test]
    fn test_unavailable_summarizer_not_called() {
        let generator =
            ReportGenerator::new().with_summarizer(Arc::new(OfflineSummarizer), SummaryMode::Concise);
        let report = generator.generate_full_report(&dataset(), "bench.csv");
        assert!(report.narrative.is_none());
    }

    #[test]
    fn test_with_config_fails_fast() {
        let config = AnalysisConfig::new().with_weights(QualityWeights::new(0.1, 0.1, 0.1, 0.1));
        assert!(matches!(
            ReportGenerator::with_config(&config),
            Err(AssayError::Config(_))
        ));
    }
}
