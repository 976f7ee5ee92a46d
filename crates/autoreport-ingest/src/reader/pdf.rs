//! PDF reader.
//!
//! Page text is extracted with `lopdf`. Each page is probed for a
//! delimiter-separated table; the first page table becomes the primary
//! table and the rest are kept as side tables named `page-N`. Without any
//! page table the concatenated text is probed once more before falling
//! back to text-only analysis.

use std::path::Path;

use autoreport_model::FormatTag;

use crate::error::Result;
use crate::options::ReaderOptions;

use super::{FormatReader, ReadOutput};

#[derive(Debug, Clone, Copy)]
pub struct PdfReader;

impl FormatReader for PdfReader {
    fn format(&self) -> FormatTag {
        FormatTag::Pdf
    }

    #[cfg(feature = "pdf")]
    fn read(&self, path: &Path, options: &ReaderOptions) -> Result<ReadOutput> {
        extract::read_pdf(path, options)
    }

    #[cfg(not(feature = "pdf"))]
    fn read(&self, _path: &Path, _options: &ReaderOptions) -> Result<ReadOutput> {
        Err(crate::error::IngestError::FeatureDisabled { format: "PDF" })
    }
}

#[cfg(feature = "pdf")]
mod extract {
    use std::path::Path;

    use lopdf::Document;
    use tracing::debug;

    use autoreport_model::{NamedTable, Table, truncate_chars};

    use crate::error::Result;
    use crate::normalize::normalize;
    use crate::options::ReaderOptions;
    use crate::reader::ReadOutput;
    use crate::sniff::sniff_table;

    pub(super) fn read_pdf(path: &Path, options: &ReaderOptions) -> Result<ReadOutput> {
        let document = Document::load(path)?;
        let mut texts = Vec::new();
        let mut tables = Vec::new();
        for page in document.get_pages().into_keys() {
            let text = match document.extract_text(&[page]) {
                Ok(text) => text,
                Err(error) => {
                    debug!(page, %error, "skipping unreadable page");
                    continue;
                }
            };
            if let Some(table) = page_table(&text, options) {
                debug!(page, rows = table.row_count(), "table found on page");
                tables.push(NamedTable {
                    name: format!("page-{page}"),
                    table,
                });
            }
            if !text.trim().is_empty() {
                texts.push(text);
            }
        }

        let full_text = texts.join("\n");
        let mut tables = tables.into_iter();
        let primary = match tables.next() {
            Some(first) => Some(first.table),
            None => sniff_table(&full_text, options.sniff_probe_lines)
                .map(normalize)
                .filter(|t| !t.is_empty()),
        };
        Ok(ReadOutput {
            primary_table: primary,
            side_tables: tables.collect(),
            text: Some(truncate_chars(&full_text, options.text_excerpt_chars).to_string()),
            ..ReadOutput::default()
        })
    }

    /// A page counts as a table when it sniffs to a header plus at least
    /// one row that survives normalization.
    fn page_table(text: &str, options: &ReaderOptions) -> Option<Table> {
        let raw = sniff_table(text, options.sniff_probe_lines)?;
        if raw.row_count() == 0 {
            return None;
        }
        Some(normalize(raw)).filter(|t| !t.is_empty())
    }
}
