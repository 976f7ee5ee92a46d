//! Pipeline entry point and terminal plumbing for the `autoreport` binary.

pub mod logging;
pub mod pipeline;
pub mod summary;

pub use pipeline::{AnalysisOptions, analyze_document, analyze_path, analyze_path_with};
