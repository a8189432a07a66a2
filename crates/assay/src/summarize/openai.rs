//! OpenAI chat completions summarizer.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::json;

use crate::error::{AssayError, Result};

use super::prompts;
use super::provider::{api_key_from_env, Availability, Summarizer, SummarizerConfig, SummaryMode};

/// OpenAI API endpoint.
const API_URL: &str = "https://api.openai.com/v1/chat/completions";

const API_KEY_VAR: &str = "OPENAI_API_KEY";

const NAME: &str = "openai";

/// OpenAI GPT summarizer.
pub struct OpenAiSummarizer {
    client: Client,
    api_key: Option<String>,
    config: SummarizerConfig,
}

impl OpenAiSummarizer {
    /// Create a summarizer with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(Some(api_key.into()), Self::default_config())
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

    /// Create from the `OPENAI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = api_key_from_env(API_KEY_VAR);
        if api_key.is_none() {
            tracing::warn!("{} not set; openai summaries disabled", API_KEY_VAR);
        }
        Self::with_config(api_key, Self::default_config())
    }

    fn default_config() -> SummarizerConfig {
        SummarizerConfig {
            model: "gpt-4o".to_string(),
            ..SummarizerConfig::default()
        }
    }

    fn build_headers(&self, api_key: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| AssayError::provider(NAME, format!("invalid API key: {}", e)))?,
        );
        Ok(headers)
    }

    fn send_message(&self, api_key: &str, user_prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "messages": [
                {
                    "role": "system",
                    "content": prompts::system_prompt()
                },
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

        let api_response: ChatResponse = response
            .json()
            .map_err(|e| AssayError::provider(NAME, format!("failed to parse API response: {}", e)))?;

        api_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AssayError::provider(NAME, "no choices in API response"))
    }
}

impl Summarizer for OpenAiSummarizer {
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
                "openai summarizer",
                format!("{} is not set", API_KEY_VAR),
            ));
        };

        let prompt = prompts::summary_prompt(text, mode);
        tracing::debug!(mode = %mode, model = %self.config.model, "requesting openai summary");
        let response = self.send_message(api_key, &prompt)?;
        Ok(response.trim().to_string())
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_key_is_unavailable() {
        let summarizer =
            OpenAiSummarizer::with_config(None, OpenAiSummarizer::default_config()).unwrap();
        assert!(matches!(
            summarizer.availability(),
            Availability::Unavailable(reason) if reason.contains("OPENAI_API_KEY")
        ));
        assert!(matches!(
            summarizer.summarize("x", SummaryMode::Teaching),
            Err(AssayError::Unavailable { .. })
        ));
    }

    #[test]
    fn test_default_model() {
        assert_eq!(OpenAiSummarizer::default_config().model, "gpt-4o");
    }

    #[test]
    fn test_parse_response() {
        let raw = r#"{"choices": [{"message": {"role": "assistant", "content": "Summary"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Summary");
    }
}
