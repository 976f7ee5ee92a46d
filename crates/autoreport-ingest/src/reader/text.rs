//! Plain text reader (`.txt`, `.md`, `.log`).

use std::fs;
use std::path::Path;

use autoreport_model::{FormatTag, truncate_chars};

use crate::encoding::decode_with_fallback;
use crate::error::Result;
use crate::normalize::normalize;
use crate::options::ReaderOptions;
use crate::sniff::sniff_table;

use super::{FormatReader, ReadOutput};

#[derive(Debug, Clone, Copy)]
pub struct TextReader;

impl FormatReader for TextReader {
    fn format(&self) -> FormatTag {
        FormatTag::Text
    }

    fn read(&self, path: &Path, options: &ReaderOptions) -> Result<ReadOutput> {
        let bytes = fs::read(path)?;
        let decoded = decode_with_fallback(&bytes, &options.text_encodings)?;
        let table = sniff_table(&decoded.text, options.sniff_probe_lines)
            .map(normalize)
            .filter(|t| !t.is_empty());
        Ok(ReadOutput {
            primary_table: table,
            text: Some(truncate_chars(&decoded.text, options.text_excerpt_chars).to_string()),
            encoding: Some(decoded.encoding.label().to_string()),
            ..ReadOutput::default()
        })
    }
}
