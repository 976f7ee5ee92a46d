//! CSV and TSV reader.

use std::fs;
use std::path::Path;

use tracing::debug;

use autoreport_model::{FormatTag, Table};

use crate::encoding::{TextEncoding, decode_with_fallback};
use crate::error::{IngestError, Result};
use crate::normalize::{field_value, normalize};
use crate::options::ReaderOptions;

use super::{FormatReader, ReadOutput};

/// Reads delimiter-separated text with a header row.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedReader {
    format: FormatTag,
    delimiter: u8,
}

impl DelimitedReader {
    pub const CSV: Self = Self {
        format: FormatTag::Csv,
        delimiter: b',',
    };
    pub const TSV: Self = Self {
        format: FormatTag::Tsv,
        delimiter: b'\t',
    };

    fn encodings<'a>(&self, options: &'a ReaderOptions) -> &'a [TextEncoding] {
        match self.format {
            FormatTag::Tsv => &options.tsv_encodings,
            _ => &options.csv_encodings,
        }
    }
}

impl FormatReader for DelimitedReader {
    fn format(&self) -> FormatTag {
        self.format
    }

    fn read(&self, path: &Path, options: &ReaderOptions) -> Result<ReadOutput> {
        let bytes = fs::read(path)?;
        let decoded = decode_with_fallback(&bytes, self.encodings(options))?;
        let table = parse_delimited(&decoded.text, self.delimiter)?;
        Ok(ReadOutput {
            primary_table: Some(normalize(table)),
            encoding: Some(decoded.encoding.label().to_string()),
            ..ReadOutput::default()
        })
    }
}

/// Parses decoded text into a raw table.
///
/// The first record is the header. Records with more fields than the
/// header are skipped; shorter records are padded with nulls.
pub fn parse_delimited(text: &str, delimiter: u8) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());
    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record?,
        None => {
            return Err(IngestError::Parse(
                "No columns to parse from file".to_string(),
            ));
        }
    };
    let headers: Vec<String> = header
        .iter()
        .map(|h| h.trim_matches('\u{feff}').to_string())
        .collect();
    let width = headers.len();

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for (idx, record) in records.enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(error) => {
                debug!(record = idx + 2, %error, "skipping unreadable record");
                skipped += 1;
                continue;
            }
        };
        if record.len() > width {
            debug!(record = idx + 2, fields = record.len(), expected = width, "skipping malformed record");
            skipped += 1;
            continue;
        }
        rows.push(record.iter().map(field_value).collect());
    }
    if skipped > 0 {
        debug!(skipped, "malformed records skipped");
    }
    Ok(Table::from_rows(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoreport_model::Value;

    #[test]
    fn parses_header_and_rows() {
        let table = parse_delimited("a,b\n1,x\n2,y\n", b',').unwrap();
        assert_eq!(table.column_names(), vec!["a", "b"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.columns()[0].values[0], Value::Text("1".into()));
    }

    #[test]
    fn skips_long_rows_and_pads_short_ones() {
        let table = parse_delimited("a,b\n1,2,3\n4\n5,6", b',').unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.columns()[1].values, vec![Value::Null, Value::Text("6".into())]);
    }

    #[test]
    fn quoted_fields_keep_delimiters() {
        let table = parse_delimited("name,note\n\"Doe, J\",\"a\"\"b\"", b',').unwrap();
        assert_eq!(table.columns()[0].values[0], Value::Text("Doe, J".into()));
        assert_eq!(table.columns()[1].values[0], Value::Text("a\"b".into()));
    }

    #[test]
    fn tab_delimiter() {
        let table = parse_delimited("a\tb\n1\t2", b'\t').unwrap();
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn empty_input_is_a_parse_failure() {
        let err = parse_delimited("", b',').unwrap_err();
        assert_eq!(err.kind(), autoreport_model::ErrorKind::ParseFailure);
    }

    #[test]
    fn missing_markers_are_null() {
        let table = parse_delimited("a\nNA\nnull\n7", b',').unwrap();
        assert_eq!(table.columns()[0].null_count(), 2);
    }
}
