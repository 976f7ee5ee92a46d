use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Terminal failure classes reported by the format readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// No configured encoding could decode the bytes.
    DecodeFailure,
    /// Extension not recognized and the CSV fallback failed too.
    UnsupportedFormat,
    /// Content is structurally malformed.
    ParseFailure,
    /// The file could not be read at all.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::DecodeFailure => "decode failure",
            Self::UnsupportedFormat => "unsupported format",
            Self::ParseFailure => "parse failure",
            Self::Io => "io error",
        };
        f.write_str(label)
    }
}

/// Failure recorded on a `SourceDocument` instead of being raised.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct ReadError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ReadError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Run-aborting failures of the analysis pipeline.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("could not read file: {0}")]
    Read(#[from] ReadError),
    #[error("document contains no table or text to analyse")]
    NoContent,
}

impl AnalysisError {
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Read(error) => Some(error.kind),
            Self::NoContent => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
