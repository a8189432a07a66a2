//! Main Assay struct and public API.

use std::path::Path;
use std::sync::Arc;

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::input::{Dataset, Parser, ParserConfig, SourceMetadata};
use crate::report::{QualityReport, ReportGenerator};
use crate::summarize::{Summarizer, SummaryMode};

/// The main Assay analysis engine.
///
/// Holds a validated configuration and the components built from it. An
/// `Assay` is immutable after construction and can be shared across threads.
pub struct Assay {
    config: AnalysisConfig,
    parser: Parser,
    generator: ReportGenerator,
}

impl Default for Assay {
    fn default() -> Self {
        Self {
            config: AnalysisConfig::default(),
            parser: Parser::new(),
            generator: ReportGenerator::new(),
        }
    }
}

impl Assay {
    /// Create a new Assay instance with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an Assay instance with custom configuration.
    pub fn with_config(config: AnalysisConfig) -> Result<Self> {
        let generator = ReportGenerator::with_config(&config)?;
        Ok(Self {
            config,
            parser: Parser::new(),
            generator,
        })
    }

    /// Use a custom parser configuration for file input.
    pub fn with_parser_config(mut self, config: ParserConfig) -> Self {
        self.parser = Parser::with_config(config);
        self
    }

    /// Attach a summarizer for narrative summaries.
    pub fn with_summarizer(mut self, summarizer: Arc<dyn Summarizer>, mode: SummaryMode) -> Self {
        self.generator = self.generator.with_summarizer(summarizer, mode);
        self
    }

    /// The configuration this instance was built with.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Parse a data file and produce its quality report.
    ///
    /// The report is named after `name`, or the file name when `None`.
    pub fn analyze(
        &self,
        path: impl AsRef<Path>,
        name: Option<&str>,
    ) -> Result<(QualityReport, SourceMetadata)> {
        let path = path.as_ref();
        let (dataset, source) = self.parser.parse_file(path)?;

        let name = name.unwrap_or(source.file.as_str());
        let report = self.analyze_dataset(&dataset, name);
        Ok((report, source))
    }

    /// Produce the quality report for an in-memory dataset.
    ///
    /// Degenerate datasets still produce a report; this never fails.
    pub fn analyze_dataset(&self, dataset: &Dataset, name: &str) -> QualityReport {
        self.generator.generate_full_report(dataset, name)
    }
}
