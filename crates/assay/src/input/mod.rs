//! Dataset model and ingestion.

mod dataset;
mod parser;
mod source;
mod value;

pub use dataset::Dataset;
pub use parser::{Parser, ParserConfig};
pub use source::{SourceFormat, SourceMetadata};
pub use value::{ColumnClass, ColumnType, Value};
pub(crate) use value::CellKey;
