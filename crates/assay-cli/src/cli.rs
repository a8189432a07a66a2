//! CLI argument definitions using clap.

use assay::{ReportFormat, SummarizerChoice, SummaryMode};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Assay: quality profiling and anomaly detection for lab datasets
#[derive(Parser)]
#[command(name = "assay")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a full quality report for a data file
    Analyze {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Dataset name shown in the report (default: file name)
        #[arg(short, long)]
        name: Option<String>,

        /// Report format (text, json)
        #[arg(short, long, default_value = "text")]
        format: ReportFormat,

        /// Write the report to a file, or into a directory with a timestamped name
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON analysis configuration (weights, thresholds, domain rules)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Summarizer for a narrative section
        #[arg(long, default_value = "none")]
        summarizer: SummarizerArg,

        /// Narrative style (concise, teaching, key-findings)
        #[arg(long, default_value = "concise")]
        mode: SummaryMode,
    },

    /// Show the descriptive profile of a data file
    Profile {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Summarizer choice for narrative summaries
#[derive(Clone, Debug, Default)]
pub enum SummarizerArg {
    /// No narrative
    #[default]
    None,
    /// Deterministic offline summary
    Mock,
    /// Anthropic Claude API (requires ANTHROPIC_API_KEY)
    Anthropic,
    /// OpenAI GPT API (requires OPENAI_API_KEY)
    OpenAI,
}

impl std::str::FromStr for SummarizerArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(SummarizerArg::None),
            "mock" | "test" => Ok(SummarizerArg::Mock),
            "anthropic" | "claude" => Ok(SummarizerArg::Anthropic),
            "openai" | "gpt" => Ok(SummarizerArg::OpenAI),
            _ => Err(format!(
                "Unknown summarizer: {}. Use: none, mock, anthropic, or openai.",
                s
            )),
        }
    }
}

impl std::fmt::Display for SummarizerArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummarizerArg::None => write!(f, "none"),
            SummarizerArg::Mock => write!(f, "mock"),
            SummarizerArg::Anthropic => write!(f, "anthropic"),
            SummarizerArg::OpenAI => write!(f, "openai"),
        }
    }
}

impl From<SummarizerArg> for SummarizerChoice {
    fn from(arg: SummarizerArg) -> Self {
        match arg {
            SummarizerArg::None => SummarizerChoice::None,
            SummarizerArg::Mock => SummarizerChoice::Mock,
            SummarizerArg::Anthropic => SummarizerChoice::Anthropic,
            SummarizerArg::OpenAI => SummarizerChoice::OpenAi,
        }
    }
}
