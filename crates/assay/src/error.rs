//! Error types for the Assay library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Assay operations.
#[derive(Debug, Error)]
pub enum AssayError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Input that cannot be turned into a dataset.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Analysis configuration rejected at setup.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An optional capability is not usable in this environment.
    #[error("{capability} is unavailable: {reason}")]
    Unavailable { capability: String, reason: String },

    /// A summarization provider returned an error.
    #[error("Provider error ({provider}): {message}")]
    Provider { provider: String, message: String },

    /// The global log subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl AssayError {
    /// Build an `Unavailable` error.
    pub fn unavailable(capability: impl Into<String>, reason: impl Into<String>) -> Self {
        AssayError::Unavailable {
            capability: capability.into(),
            reason: reason.into(),
        }
    }

    /// Build a `Provider` error.
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        AssayError::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }
}

/// Validation errors for analysis configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("quality weights must sum to 1.0, got {0}")]
    WeightSum(f64),
    #[error("quality weight '{name}' must be within [0.0, 1.0], got {value}")]
    WeightRange { name: &'static str, value: f64 },
    #[error("z-score threshold must be positive and finite, got {0}")]
    ZScoreThreshold(f64),
    #[error("IQR multiplier must be positive and finite, got {0}")]
    IqrMultiplier(f64),
    #[error("unknown temperature unit: {0}")]
    UnknownUnit(String),
    #[error("rule for {field} has min {min} greater than max {max}")]
    InvertedBounds {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("binding for column '{column}' names unknown field '{field}'")]
    UnknownField { column: String, field: String },
}

/// Result type alias for Assay operations.
pub type Result<T> = std::result::Result<T, AssayError>;
