//! Deterministic summarizer for tests and offline runs.

use crate::error::Result;

use super::provider::{Availability, Summarizer, SummaryMode};

/// Number of report lines quoted by the mock.
const QUOTED_LINES: usize = 3;

/// Summarizer that derives its output from the input text alone.
///
/// The same input and mode always produce the same output.
#[derive(Debug, Clone, Default)]
pub struct MockSummarizer;

impl MockSummarizer {
    pub fn new() -> Self {
        Self
    }
}

impl Summarizer for MockSummarizer {
    fn name(&self) -> &str {
        "mock"
    }

    fn availability(&self) -> Availability {
        Availability::Available
    }

    fn summarize(&self, text: &str, mode: SummaryMode) -> Result<String> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.chars().all(|c| "=╔╗╚╝╠╣═║ ".contains(c)))
            .collect();

        let verdict = lines
            .iter()
            .rev()
            .find(|l| l.contains("Overall data quality"))
            .map(|l| l.trim_start_matches(|c: char| c.is_ascii_digit() || c == '.' || c == ' '))
            .unwrap_or("No verdict found");

        let heading = match mode {
            SummaryMode::Concise => "# Summary",
            SummaryMode::Teaching => "# What The Checks Found",
            SummaryMode::KeyFindings => "## Key Findings",
        };

        let mut out = format!("{}\n\n{}\n", heading, verdict);
        for (i, line) in lines.iter().take(QUOTED_LINES).enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, line));
        }
        out.push_str(&format!("({} report lines reviewed)\n", lines.len()));
        Ok(out)
    }
}
