use thiserror::Error;

use autoreport_model::{ErrorKind, ReadError};

/// Errors raised inside the readers before they are folded into a
/// `SourceDocument`.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not decode bytes with any supported encoding (tried {})", .attempted.join(", "))]
    Decode { attempted: Vec<&'static str> },

    #[error("Unsupported file type: {extension}")]
    Unsupported { extension: String },

    #[error("{format} support is not enabled in this build")]
    FeatureDisabled { format: &'static str },

    #[error("{0}")]
    Parse(String),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[cfg(feature = "pdf")]
    #[error("pdf error: {0}")]
    Pdf(#[from] lopdf::Error),
}

impl IngestError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::Decode { .. } => ErrorKind::DecodeFailure,
            Self::Unsupported { .. } | Self::FeatureDisabled { .. } => {
                ErrorKind::UnsupportedFormat
            }
            Self::Parse(_) | Self::Json(_) | Self::Csv(_) | Self::Workbook(_) => {
                ErrorKind::ParseFailure
            }
            #[cfg(feature = "pdf")]
            Self::Pdf(_) => ErrorKind::ParseFailure,
        }
    }
}

impl From<IngestError> for ReadError {
    fn from(error: IngestError) -> Self {
        ReadError::new(error.kind(), error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
