//! Optional narrative summaries of quality reports.
//!
//! Summarization is never required: reports are complete without it. When a
//! [`Summarizer`] is attached to the report generator and reports itself
//! available, the rendered findings are passed to it and the result is stored
//! as the report's narrative.
//!
//! # Providers
//!
//! - **Mock** - deterministic, offline
//! - **Anthropic** - Claude models via API (requires `ANTHROPIC_API_KEY`)
//! - **OpenAI** - GPT models via API (requires `OPENAI_API_KEY`)

mod anthropic;
mod mock;
mod openai;
pub(crate) mod prompts;
mod provider;

pub use anthropic::AnthropicSummarizer;
pub use mock::MockSummarizer;
pub use openai::OpenAiSummarizer;
pub use provider::{
    build_summarizer, Availability, Summarizer, SummarizerChoice, SummarizerConfig, SummaryMode,
};
