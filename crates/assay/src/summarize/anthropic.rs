//! Anthropic Claude API summarizer.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::json;

use crate::error::{AssayError, Result};

use super::prompts;
use super::provider::{api_key_from_env, Availability, Summarizer, SummarizerConfig, SummaryMode};

/// Anthropic API endpoint.
const API_URL: &str = "https://api.anthropic.com/v1/messages";

/// Anthropic API version.
const API_VERSION: &str = "2023-06-01";

/// Environment variable holding the API key.
const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

const NAME: &str = "anthropic";

/// Anthropic Claude summarizer.
pub struct AnthropicSummarizer {
    client: Client,
    api_key: Option<String>,
    config: SummarizerConfig,
}

impl AnthropicSummarizer {
    /// Create a summarizer with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(Some(api_key.into()), SummarizerConfig::default())
    }

    /// Create a summarizer with custom configuration.
    pub fn with_config(api_key: Option<String>, config: SummarizerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AssayError::provider(NAME, format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    /// Create from the `ANTHROPIC_API_KEY` environment variable.
    ///
    /// Without a key the summarizer is returned but reports itself unavailable.
    pub fn from_env() -> Result<Self> {
        let api_key = api_key_from_env(API_KEY_VAR);
        if api_key.is_none() {
            tracing::warn!("{} not set; anthropic summaries disabled", API_KEY_VAR);
        }
        Self::with_config(api_key, SummarizerConfig::default())
    }

    /// Build headers for API requests.
    fn build_headers(&self, api_key: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(api_key)
                .map_err(|e| AssayError::provider(NAME, format!("invalid API key: {}", e)))?,
        );
        headers.insert("anthropic-version", HeaderValue::from_static(API_VERSION));
        Ok(headers)
    }

    /// Send a message to the Claude API.
    fn send_message(&self, api_key: &str, user_prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "system": prompts::system_prompt(),
            "messages": [
                {
                    "role": "user",
                    "content": user_prompt
                }
            ]
        });

        let response = self
            .client
            .post(API_URL)
            .headers(self.build_headers(api_key)?)
            .json(&body)
            .send()
            .map_err(|e| AssayError::provider(NAME, format!("API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();
            return Err(AssayError::provider(
                NAME,
                format!("API error ({}): {}", status, error_text),
            ));
        }

        let api_response: ApiResponse = response
            .json()
            .map_err(|e| AssayError::provider(NAME, format!("failed to parse API response: {}", e)))?;

        api_response
            .content
            .into_iter()
            .find_map(|block| (block.content_type == "text").then_some(block.text))
            .ok_or_else(|| AssayError::provider(NAME, "no text in API response"))
    }
}

impl Summarizer for AnthropicSummarizer {
    fn name(&self) -> &str {
        NAME
    }

    fn availability(&self) -> Availability {
        match self.api_key {
            Some(_) => Availability::Available,
            None => Availability::Unavailable(format!("{} is not set", API_KEY_VAR)),
        }
    }

    fn summarize(&self, text: &str, mode: SummaryMode) -> Result<String> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(AssayError::unavailable(
                "anthropic summarizer",
                format!("{} is not set", API_KEY_VAR),
            ));
        };

        let prompt = prompts::summary_prompt(text, mode);
        tracing::debug!(mode = %mode, model = %self.config.model, "requesting anthropic summary");
        let response = self.send_message(api_key, &prompt)?;
        Ok(response.trim().to_string())
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_key_is_unavailable() {
        let summarizer = AnthropicSummarizer::with_config(None, SummarizerConfig::default()).unwrap();
        assert!(!summarizer.availability().is_available());
        let err = summarizer
            .summarize("report", SummaryMode::Concise)
            .unwrap_err();
        assert!(matches!(err, AssayError::Unavailable { .. }));
    }

    #[test]
    fn test_with_key_is_available() {
        let summarizer = AnthropicSummarizer::new("sk-test").unwrap();
        assert!(summarizer.availability().is_available());
        assert_eq!(summarizer.name(), "anthropic");
    }

    #[test]
    fn test_parse_response() {
        let raw = r#"{"content": [{"type": "text", "text": "All good."}]}"#;
        let parsed: ApiResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.content[0].text, "All good.");
    }
}
