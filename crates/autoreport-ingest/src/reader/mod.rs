//! Format dispatch.
//!
//! One reader per [`FormatTag`], looked up from a static strategy table.
//! Unknown extensions are retried with the CSV reader before being
//! reported as unsupported.

mod delimited;
mod json;
mod pdf;
mod spreadsheet;
mod text;

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use autoreport_model::{FormatTag, NamedTable, SourceDocument, Table, human_size};

use crate::error::{IngestError, Result};
use crate::options::ReaderOptions;

pub use delimited::{DelimitedReader, parse_delimited};
pub use json::{JsonReader, flatten_json};
pub use pdf::PdfReader;
pub use spreadsheet::SpreadsheetReader;
pub use text::TextReader;

/// A reader for one input format.
pub trait FormatReader {
    /// Format this reader decodes.
    fn format(&self) -> FormatTag;

    /// Decodes the file at `path`.
    fn read(&self, path: &Path, options: &ReaderOptions) -> Result<ReadOutput>;
}

/// Payload produced by a successful read.
#[derive(Debug, Clone, Default)]
pub struct ReadOutput {
    pub primary_table: Option<Table>,
    pub side_tables: Vec<NamedTable>,
    pub sheet_names: Vec<String>,
    pub text: Option<String>,
    pub raw_json: Option<serde_json::Value>,
    pub encoding: Option<String>,
    pub caveats: Vec<String>,
}

impl ReadOutput {
    fn apply(self, doc: &mut SourceDocument) {
        doc.primary_table = self.primary_table;
        doc.side_tables = self.side_tables;
        doc.sheet_names = self.sheet_names;
        doc.text = self.text;
        doc.raw_json = self.raw_json;
        doc.encoding = self.encoding;
        doc.caveats = self.caveats;
    }
}

const READERS: &[&dyn FormatReader] = &[
    &DelimitedReader::CSV,
    &DelimitedReader::TSV,
    &SpreadsheetReader,
    &JsonReader,
    &TextReader,
    &PdfReader,
];

/// The reader registered for `format`.
pub fn reader_for(format: FormatTag) -> &'static dyn FormatReader {
    READERS
        .iter()
        .copied()
        .find(|reader| reader.format() == format)
        .unwrap_or(&DelimitedReader::CSV)
}

/// Reads `path` with default options.
pub fn read(path: &Path) -> SourceDocument {
    read_with_options(path, &ReaderOptions::default())
}

/// Reads `path` into a [`SourceDocument`].
///
/// Failures never propagate: they are recorded in `SourceDocument::error`
/// and every payload field is left empty.
pub fn read_with_options(path: &Path, options: &ReaderOptions) -> SourceDocument {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let size = fs::metadata(path).map(|m| m.len()).ok();
    let mut doc = SourceDocument {
        filename,
        file_size_bytes: size.unwrap_or(0),
        file_size: size.map_or_else(|| "Unknown".to_string(), human_size),
        ..SourceDocument::default()
    };

    let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .unwrap_or_default()
        .to_string();
    let result = match FormatTag::from_extension(&extension) {
        Some(format) => {
            doc.format = Some(format);
            reader_for(format).read(path, options)
        }
        None => read_unknown(path, &extension, options).inspect(|_| {
            doc.format = Some(FormatTag::Csv);
        }),
    };

    match result {
        Ok(output) => {
            output.apply(&mut doc);
            info!(
                file = %doc.filename,
                format = ?doc.format,
                rows = doc.primary_table.as_ref().map_or(0, Table::row_count),
                "document read"
            );
        }
        Err(error) => {
            warn!(file = %doc.filename, %error, "document could not be read");
            doc.error = Some(error.into());
        }
    }
    doc
}

fn read_unknown(path: &Path, extension: &str, options: &ReaderOptions) -> Result<ReadOutput> {
    debug!(extension, "unknown extension, trying csv");
    reader_for(FormatTag::Csv)
        .read(path, options)
        .map_err(|error| match error {
            IngestError::Io(_) => error,
            _ => {
                debug!(%error, "csv fallback failed");
                IngestError::Unsupported {
                    extension: format!(".{extension}"),
                }
            }
        })
}
