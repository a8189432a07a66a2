//! In-memory dataset snapshot.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{AssayError, Result};

use super::value::{ColumnClass, ColumnType, Value};

/// An ordered, finite, immutable table of cells.
///
/// Column names are unique. Row identity is the 0-based insertion position,
/// which anomaly records refer back to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Dataset {
    /// Create a dataset from column names and row-major cells.
    ///
    /// Every row must have exactly one cell per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(AssayError::InvalidInput(format!(
                    "duplicate column name '{}'",
                    name
                )));
            }
        }

        let width = columns.len();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(idx, row)| {
                if row.len() != width {
                    return Err(AssayError::InvalidInput(format!(
                        "row {} has {} cells, expected {}",
                        idx,
                        row.len(),
                        width
                    )));
                }
                Ok(row.into_iter().map(Value::normalized).collect())
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { columns, rows })
    }

    /// Create a dataset from named columns of equal length.
    pub fn from_columns<N, V>(columns: Vec<(N, Vec<V>)>) -> Result<Self>
    where
        N: Into<String>,
        V: Into<Value>,
    {
        let row_count = columns.first().map(|(_, v)| v.len()).unwrap_or(0);
        let mut names = Vec::with_capacity(columns.len());
        let mut cells: Vec<std::vec::IntoIter<V>> = Vec::with_capacity(columns.len());

        for (name, values) in columns {
            let name = name.into();
            if values.len() != row_count {
                return Err(AssayError::InvalidInput(format!(
                    "column '{}' has {} values, expected {}",
                    name,
                    values.len(),
                    row_count
                )));
            }
            names.push(name);
            cells.push(values.into_iter());
        }

        let rows = (0..row_count)
            .map(|_| {
                cells
                    .iter_mut()
                    .map(|col| col.next().map(Into::into).unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Self::new(names, rows)
    }

    /// Create a dataset from an array of JSON objects.
    ///
    /// Column order follows first appearance; keys absent from a record are
    /// null. Booleans are stored as text, nested values are rejected.
    pub fn from_json_records(json: &serde_json::Value) -> Result<Self> {
        let records = json.as_array().ok_or_else(|| {
            AssayError::InvalidInput("expected a JSON array of records".to_string())
        })?;

        let mut parsed: Vec<IndexMap<String, Value>> = Vec::with_capacity(records.len());
        let mut columns: IndexMap<String, ()> = IndexMap::new();

        for (idx, record) in records.iter().enumerate() {
            let object = record.as_object().ok_or_else(|| {
                AssayError::InvalidInput(format!("record {} is not a JSON object", idx))
            })?;

            let mut row = IndexMap::with_capacity(object.len());
            for (key, value) in object {
                columns.entry(key.clone()).or_insert(());
                row.insert(key.clone(), json_cell(value, idx, key)?);
            }
            parsed.push(row);
        }

        let names: Vec<String> = columns.into_keys().collect();
        let rows = parsed
            .into_iter()
            .map(|mut record| {
                names
                    .iter()
                    .map(|name| record.swap_remove(name).unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Self::new(names, rows)
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows.len() * self.columns.len()
    }

    /// Returns true when the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// All rows in order.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().map(move |row| &row[index])
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Number of non-null cells in a column.
    pub fn non_null_count(&self, index: usize) -> usize {
        self.column_values(index).filter(|v| !v.is_null()).count()
    }

    /// Coercion class inferred from the majority of non-null values.
    ///
    /// Ties and all-null columns are textual.
    pub fn column_class(&self, index: usize) -> ColumnClass {
        let (numbers, texts) =
            self.column_values(index)
                .fold((0usize, 0usize), |(n, t), value| match value {
                    Value::Number(_) => (n + 1, t),
                    Value::Text(_) => (n, t + 1),
                    Value::Null => (n, t),
                });

        if numbers > texts {
            ColumnClass::Numeric
        } else {
            ColumnClass::Text
        }
    }

    /// Storage type of a column.
    pub fn column_type(&self, index: usize) -> ColumnType {
        if self.non_null_count(index) == 0 {
            return ColumnType::Empty;
        }
        match self.column_class(index) {
            ColumnClass::Text => ColumnType::Text,
            ColumnClass::Numeric => {
                let integral = self
                    .numeric_values(index)
                    .iter()
                    .all(|(_, v)| v.fract() == 0.0);
                if integral {
                    ColumnType::Integer
                } else {
                    ColumnType::Float
                }
            }
        }
    }

    /// Indices of numeric-class columns.
    pub fn numeric_columns(&self) -> Vec<usize> {
        (0..self.column_count())
            .filter(|&idx| self.column_class(idx).is_numeric())
            .collect()
    }

    /// Non-null numeric values of a numeric-class column with their row index.
    ///
    /// Text cells in a numeric column are coerced best-effort; cells that do
    /// not parse are excluded. Text-class columns yield nothing.
    pub fn numeric_values(&self, index: usize) -> Vec<(usize, f64)> {
        if !self.column_class(index).is_numeric() {
            return Vec::new();
        }

        let mut excluded = 0usize;
        let values: Vec<(usize, f64)> = self
            .column_values(index)
            .enumerate()
            .filter_map(|(row, value)| match value {
                Value::Null => None,
                other => match other.coerce_number() {
                    Some(v) => Some((row, v)),
                    None => {
                        excluded += 1;
                        None
                    }
                },
            })
            .collect();

        if excluded > 0 {
            tracing::debug!(
                column = %self.columns[index],
                excluded,
                "excluded non-numeric cells from numeric column"
            );
        }

        values
    }

    /// Approximate in-memory footprint in bytes.
    pub fn approximate_memory_bytes(&self) -> usize {
        let cells = self.cell_count() * std::mem::size_of::<Value>();
        let text: usize = self
            .rows
            .iter()
            .flatten()
            .map(|v| match v {
                Value::Text(s) => s.len(),
                _ => 0,
            })
            .sum();
        let names: usize = self
            .columns
            .iter()
            .map(|c| c.len() + std::mem::size_of::<String>())
            .sum();
        cells + text + names
    }
}

fn json_cell(value: &serde_json::Value, row: usize, key: &str) -> Result<Value> {
    match value {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Number(n) => Ok(n.as_f64().map(Value::number).unwrap_or(Value::Null)),
        serde_json::Value::String(s) => Ok(Value::Text(s.clone())),
        serde_json::Value::Bool(b) => Ok(Value::Text(b.to_string())),
        _ => Err(AssayError::InvalidInput(format!(
            "record {} field '{}' is not a scalar",
            row, key
        ))),
    }
}
