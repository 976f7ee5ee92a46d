//! Reader configuration.

use crate::encoding::TextEncoding;

/// Options shared by all format readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Encodings tried, in order, for `.csv` and unknown extensions.
    pub csv_encodings: Vec<TextEncoding>,
    /// Encodings tried, in order, for `.tsv`.
    pub tsv_encodings: Vec<TextEncoding>,
    /// Encodings tried, in order, for `.txt`, `.md` and `.log`.
    pub text_encodings: Vec<TextEncoding>,
    /// Characters of text kept for profiling (text and PDF documents).
    pub text_excerpt_chars: usize,
    /// Characters of pretty-printed JSON kept as a text excerpt.
    pub json_excerpt_chars: usize,
    /// Non-empty lines that must agree on field count for a text file to
    /// be reinterpreted as a table.
    pub sniff_probe_lines: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            csv_encodings: vec![
                TextEncoding::Utf8,
                TextEncoding::Latin1,
                TextEncoding::Windows1252,
            ],
            tsv_encodings: vec![TextEncoding::Utf8, TextEncoding::Latin1],
            text_encodings: vec![TextEncoding::Utf8, TextEncoding::Latin1],
            text_excerpt_chars: 10_000,
            json_excerpt_chars: 5_000,
            sniff_probe_lines: 5,
        }
    }
}

impl ReaderOptions {
    /// Set the encodings tried for CSV input.
    pub fn with_csv_encodings(mut self, encodings: Vec<TextEncoding>) -> Self {
        self.csv_encodings = encodings;
        self
    }

    /// Set the encodings tried for TSV input.
    pub fn with_tsv_encodings(mut self, encodings: Vec<TextEncoding>) -> Self {
        self.tsv_encodings = encodings;
        self
    }

    /// Set the encodings tried for free-text input.
    pub fn with_text_encodings(mut self, encodings: Vec<TextEncoding>) -> Self {
        self.text_encodings = encodings;
        self
    }

    pub fn with_text_excerpt_chars(mut self, chars: usize) -> Self {
        self.text_excerpt_chars = chars;
        self
    }

    pub fn with_json_excerpt_chars(mut self, chars: usize) -> Self {
        self.json_excerpt_chars = chars;
        self
    }

    pub fn with_sniff_probe_lines(mut self, lines: usize) -> Self {
        self.sniff_probe_lines = lines.max(1);
        self
    }
}
