//! Summarizer trait and shared types.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{AssayError, Result};

use super::anthropic::AnthropicSummarizer;
use super::mock::MockSummarizer;
use super::openai::OpenAiSummarizer;

/// Style of the generated narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryMode {
    /// Short technical digest.
    #[default]
    Concise,
    /// Plain-language explanation for students and non-specialists.
    Teaching,
    /// Numbered list of the most important findings.
    KeyFindings,
}

impl SummaryMode {
    pub const ALL: [SummaryMode; 3] = [
        SummaryMode::Concise,
        SummaryMode::Teaching,
        SummaryMode::KeyFindings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryMode::Concise => "concise",
            SummaryMode::Teaching => "teaching",
            SummaryMode::KeyFindings => "key_findings",
        }
    }
}

impl fmt::Display for SummaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryMode {
    type Err = AssayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "concise" => Ok(SummaryMode::Concise),
            "teaching" => Ok(SummaryMode::Teaching),
            "key_findings" => Ok(SummaryMode::KeyFindings),
            other => Err(AssayError::InvalidInput(format!(
                "unknown summary mode '{}'",
                other
            ))),
        }
    }
}

/// Whether a summarizer can be used right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable(String),
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

/// Settings shared by the HTTP-backed summarizers.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Model identifier sent to the provider.
    pub model: String,
    /// Maximum tokens in the response.
    pub max_tokens: usize,
    /// Sampling temperature (0.0-1.0).
    pub temperature: f64,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 500,
            temperature: 0.3,
            timeout_secs: 60,
        }
    }
}

/// Turns rendered findings into a narrative summary.
///
/// Implementations must be thread-safe (Send + Sync) so one instance can be
/// shared by concurrent report runs.
pub trait Summarizer: Send + Sync {
    /// Name of this provider (for logging).
    fn name(&self) -> &str;

    /// Check whether the provider can be called.
    fn availability(&self) -> Availability;

    /// Summarize `text` in the given mode.
    ///
    /// Returns [`AssayError::Unavailable`] when called on an unavailable provider.
    fn summarize(&self, text: &str, mode: SummaryMode) -> Result<String>;
}

/// Summarizer selection, as exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummarizerChoice {
    #[default]
    None,
    Mock,
    Anthropic,
    OpenAi,
}

/// Build the selected summarizer, reading API keys from the environment.
///
/// A provider without a key is still returned; it reports itself unavailable.
pub fn build_summarizer(choice: SummarizerChoice) -> Result<Option<Arc<dyn Summarizer>>> {
    let summarizer: Arc<dyn Summarizer> = match choice {
        SummarizerChoice::None => return Ok(None),
        SummarizerChoice::Mock => Arc::new(MockSummarizer::new()),
        SummarizerChoice::Anthropic => Arc::new(AnthropicSummarizer::from_env()?),
        SummarizerChoice::OpenAi => Arc::new(OpenAiSummarizer::from_env()?),
    };
    Ok(Some(summarizer))
}

/// Read an API key, treating empty values and `demo_mode` as absent.
pub(crate) fn api_key_from_env(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty() && k != "demo_mode")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("concise".parse::<SummaryMode>().unwrap(), SummaryMode::Concise);
        assert_eq!(
            "key-findings".parse::<SummaryMode>().unwrap(),
            SummaryMode::KeyFindings
        );
        assert!("detailed".parse::<SummaryMode>().is_err());
    }

    #[test]
    fn test_build_none_and_mock() {
        assert!(build_summarizer(SummarizerChoice::None).unwrap().is_none());
        let mock = build_summarizer(SummarizerChoice::Mock).unwrap().unwrap();
        assert_eq!(mock.name(), "mock");
        assert!(mock.availability().is_available());
    }
}
