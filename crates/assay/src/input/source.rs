//! Provenance of a dataset read from disk.

use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::dataset::Dataset;

/// Text layout a data file was read with, named after its delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    Csv,
    Tsv,
    /// Semicolon-separated, common in locales with a decimal comma.
    Semicolon,
    /// Pipe-separated.
    Pipe,
    /// Any other configured delimiter.
    Delimited,
}

impl SourceFormat {
    pub fn from_delimiter(delimiter: u8) -> Self {
        match delimiter {
            b',' => SourceFormat::Csv,
            b'\t' => SourceFormat::Tsv,
            b';' => SourceFormat::Semicolon,
            b'|' => SourceFormat::Pipe,
            _ => SourceFormat::Delimited,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Csv => "csv",
            SourceFormat::Tsv => "tsv",
            SourceFormat::Semicolon => "semicolon",
            SourceFormat::Pipe => "pipe",
            SourceFormat::Delimited => "delimited",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an analyzed dataset came from.
///
/// The digest identifies the exact bytes a report was computed from, so two
/// reports can be matched to the same input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without directories; the default dataset name.
    pub file: String,
    /// `sha256:` followed by the hex digest of the raw bytes.
    pub digest: String,
    pub size_bytes: u64,
    pub format: SourceFormat,
    pub rows: usize,
    pub columns: usize,
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Describe `dataset` as parsed from `contents` at `path`.
    pub fn from_contents(path: &Path, contents: &[u8], delimiter: u8, dataset: &Dataset) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            digest: digest(contents),
            size_bytes: contents.len() as u64,
            format: SourceFormat::from_delimiter(delimiter),
            rows: dataset.row_count(),
            columns: dataset.column_count(),
            loaded_at: Utc::now(),
        }
    }
}

fn digest(contents: &[u8]) -> String {
    format!("sha256:{:x}", Sha256::digest(contents))
}
