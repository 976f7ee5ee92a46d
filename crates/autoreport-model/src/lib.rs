//! Data model shared by the AutoReport analysis stages.
//!
//! Readers produce a [`SourceDocument`], the normalizer and profilers work
//! on [`Table`]s, and the pipeline assembles an [`AnalysisRecord`].

pub mod document;
pub mod error;
pub mod format;
pub mod profile;
pub mod record;
pub mod table;
pub mod value;

pub use document::{DocumentSummary, FormatTag, SourceDocument};
pub use error::{AnalysisError, ErrorKind, ReadError, Result};
pub use format::{format_numeric, format_thousands, human_size, round_to, truncate_chars};
pub use profile::{
    CategoricalProfile, ColumnProfile, CorrelationMatrix, CorrelationPair, DatetimeProfile,
    MissingColumn, NumericProfile, Overview, TableProfile, TextStats, ValueCount, WordCount,
};
pub use record::{AnalysisRecord, Insight};
pub use table::{Column, ColumnKind, NamedTable, Table};
pub use value::Value;
