//! Cell values and column classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tokens treated as missing when reading delimited text.
const NULL_TOKENS: &[&str] = &["na", "n/a", "null", "none", "nil", "nan"];

/// A single cell value.
///
/// Non-finite numbers are never stored: [`Value::number`] and the dataset
/// constructors turn them into [`Value::Null`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
    Null,
}

impl Value {
    /// Create a numeric value, mapping NaN and infinities to null.
    pub fn number(value: f64) -> Self {
        if value.is_finite() {
            Value::Number(value)
        } else {
            Value::Null
        }
    }

    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Value::Text(value.into())
    }

    /// Parse a raw delimited-text cell.
    ///
    /// Null tokens become `Null`, finite floats become `Number`, anything else
    /// is kept verbatim as `Text`.
    pub fn from_cell(raw: &str) -> Self {
        if Self::is_null_token(raw) {
            return Value::Null;
        }
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Value::Number(v),
            _ => Value::Text(raw.to_string()),
        }
    }

    /// Check if a raw string represents a missing value.
    pub fn is_null_token(raw: &str) -> bool {
        let trimmed = raw.trim();
        trimmed.is_empty()
            || trimmed == "."
            || trimmed == "-"
            || NULL_TOKENS.iter().any(|t| trimmed.eq_ignore_ascii_case(t))
    }

    /// Returns true for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The stored number, without coercion.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Best-effort numeric coercion: numbers pass through, text that parses
    /// as a finite float is converted, everything else yields `None`.
    pub fn coerce_number(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            Value::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            Value::Null => None,
        }
    }

    /// Normalize a value so that the dataset invariants hold.
    pub(crate) fn normalized(self) -> Self {
        match self {
            Value::Number(v) => Value::number(v),
            other => other,
        }
    }

    /// Hashable identity of the value; `-0.0` and `0.0` share a key.
    pub(crate) fn key(&self) -> CellKey<'_> {
        match self {
            Value::Number(v) if *v == 0.0 => CellKey::Number(0f64.to_bits()),
            Value::Number(v) => CellKey::Number(v.to_bits()),
            Value::Text(s) => CellKey::Text(s),
            Value::Null => CellKey::Null,
        }
    }
}

/// Borrowed, hashable form of a [`Value`] used for distinct and duplicate counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum CellKey<'a> {
    Number(u64),
    Text(&'a str),
    Null,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(v) => write!(f, "{}", v),
            Value::Text(s) => f.write_str(s),
            Value::Null => f.write_str("null"),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Coercion class of a column, decided by the majority of its non-null values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnClass {
    Numeric,
    Text,
}

impl ColumnClass {
    /// Returns true for numeric columns.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnClass::Numeric)
    }
}

/// Storage type reported by the profiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Numeric column whose values are all whole numbers.
    Integer,
    /// Numeric column with at least one fractional value.
    Float,
    /// Textual column.
    Text,
    /// Column without a single non-null value.
    Empty,
}

impl ColumnType {
    /// Short label used in rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Text => "text",
            ColumnType::Empty => "empty",
        }
    }
}
