//! Output of the format readers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ReadError;
use crate::table::{NamedTable, Table};

/// Format a document was decoded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    Csv,
    Tsv,
    Excel,
    Json,
    Text,
    Pdf,
}

impl FormatTag {
    pub const ALL: [FormatTag; 6] = [
        Self::Csv,
        Self::Tsv,
        Self::Excel,
        Self::Json,
        Self::Text,
        Self::Pdf,
    ];

    /// Lowercase extensions (without the dot) handled by this format.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Csv => &["csv"],
            Self::Tsv => &["tsv"],
            Self::Excel => &["xlsx", "xls"],
            Self::Json => &["json"],
            Self::Text => &["txt", "md", "log"],
            Self::Pdf => &["pdf"],
        }
    }

    /// Looks up the format for an extension, case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|tag| tag.extensions().contains(&ext.as_str()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Excel => "excel",
            Self::Json => "json",
            Self::Text => "txt",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a reader extracted from one input file.
///
/// At most one of `primary_table`, `text` and `error` is the meaningful
/// payload, except that JSON and PDF documents keep a text excerpt next
/// to their table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceDocument {
    pub format: Option<FormatTag>,
    pub filename: String,
    pub file_size_bytes: u64,
    /// Human-readable size, e.g. `"1.5 KB"`.
    pub file_size: String,
    /// Label of the encoding that decoded the bytes, if any.
    pub encoding: Option<String>,
    pub primary_table: Option<Table>,
    pub side_tables: Vec<NamedTable>,
    pub sheet_names: Vec<String>,
    pub text: Option<String>,
    pub raw_json: Option<serde_json::Value>,
    /// Non-fatal notes the caller may surface (e.g. multi-sheet workbook).
    pub caveats: Vec<String>,
    pub error: Option<ReadError>,
}

impl SourceDocument {
    /// The primary table, if it has at least one row and column.
    pub fn table(&self) -> Option<&Table> {
        self.primary_table.as_ref().filter(|t| !t.is_empty())
    }

    /// The text excerpt, if it is not blank.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }

    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            filename: self.filename.clone(),
            format: self.format,
            file_size: self.file_size.clone(),
            file_size_bytes: self.file_size_bytes,
            encoding: self.encoding.clone(),
            sheet_names: self.sheet_names.clone(),
            side_tables: self.side_tables.iter().map(|t| t.name.clone()).collect(),
            caveats: self.caveats.clone(),
        }
    }
}

/// Document metadata carried into the analysis record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub filename: String,
    pub format: Option<FormatTag>,
    pub file_size: String,
    pub file_size_bytes: u64,
    pub encoding: Option<String>,
    pub sheet_names: Vec<String>,
    pub side_tables: Vec<String>,
    pub caveats: Vec<String>,
}
