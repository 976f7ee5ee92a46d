//! Ordered encoding fallback.
//!
//! Each reader carries an ordered list of encodings. The bytes are decoded
//! with the first encoding that accepts them; only when every encoding
//! rejects them does the read fail with a decode error naming all attempts.

use std::borrow::Cow;

use encoding_rs::{UTF_8, WINDOWS_1252};
use tracing::debug;

use crate::error::{IngestError, Result};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    Utf8,
    /// ISO-8859-1: every byte maps to the code point of the same value.
    Latin1,
    Windows1252,
}

impl TextEncoding {
    pub fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Latin1 => "latin-1",
            Self::Windows1252 => "cp1252",
        }
    }

    /// Decodes `bytes` strictly, returning `None` on any malformed sequence.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Utf8 => {
                let bytes = bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes);
                UTF_8
                    .decode_without_bom_handling_and_without_replacement(bytes)
                    .map(Cow::into_owned)
            }
            Self::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            Self::Windows1252 => WINDOWS_1252
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(Cow::into_owned),
        }
    }
}

/// Text together with the encoding that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub encoding: TextEncoding,
    pub text: String,
}

/// Decodes with the first encoding in `encodings` that accepts the bytes.
pub fn decode_with_fallback(bytes: &[u8], encodings: &[TextEncoding]) -> Result<DecodedText> {
    for &encoding in encodings {
        match encoding.decode(bytes) {
            Some(text) => {
                debug!(encoding = encoding.label(), bytes = bytes.len(), "decoded input");
                return Ok(DecodedText { encoding, text });
            }
            None => debug!(encoding = encoding.label(), "encoding rejected input"),
        }
    }
    Err(IngestError::Decode {
        attempted: encodings.iter().map(|e| e.label()).collect(),
    })
}
