//! Input decoding for AutoReport.
//!
//! [`read`] dispatches on the file extension to a [`FormatReader`], decodes
//! the bytes with an ordered encoding fallback and returns a
//! [`SourceDocument`](autoreport_model::SourceDocument) whose tables are
//! already normalized by [`normalize`].

pub mod encoding;
pub mod error;
pub mod normalize;
pub mod options;
pub mod reader;
pub mod sniff;

pub use encoding::{DecodedText, TextEncoding, decode_with_fallback};
pub use error::IngestError;
pub use normalize::{MISSING_MARKERS, field_value, normalize, parse_bool, parse_number};
pub use options::ReaderOptions;
pub use reader::{FormatReader, ReadOutput, read, read_with_options, reader_for};
pub use sniff::sniff_table;
