//! End-to-end analysis: read, profile, derive insights.

use std::path::Path;

use chrono::Local;
use tracing::{info, info_span, warn};

use autoreport_ingest::{ReaderOptions, read_with_options};
use autoreport_model::{AnalysisError, AnalysisRecord, SourceDocument};
use autoreport_profile::{ProfileOptions, profile_table_with, profile_text_with};

const GENERATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Knobs for one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    pub reader: ReaderOptions,
    pub profile: ProfileOptions,
}

/// Analyzes the file at `path` with default options.
pub fn analyze_path(path: &Path) -> Result<AnalysisRecord, AnalysisError> {
    analyze_path_with(path, &AnalysisOptions::default())
}

pub fn analyze_path_with(
    path: &Path,
    options: &AnalysisOptions,
) -> Result<AnalysisRecord, AnalysisError> {
    let span = info_span!("analyze", path = %path.display());
    let _guard = span.enter();

    let document = info_span!("read").in_scope(|| read_with_options(path, &options.reader));
    let generated = Local::now().format(GENERATED_FORMAT).to_string();
    analyze_document(document, generated, &options.profile)
}

/// Profiles an already-read document.
///
/// A recorded read error aborts the run. Otherwise a non-empty table is
/// profiled statistically, falling back to the text profile, and a
/// document with neither is [`AnalysisError::NoContent`].
pub fn analyze_document(
    mut document: SourceDocument,
    generated: String,
    options: &ProfileOptions,
) -> Result<AnalysisRecord, AnalysisError> {
    if let Some(error) = document.error.take() {
        warn!(kind = %error.kind, "read failed");
        return Err(AnalysisError::Read(error));
    }
    for caveat in &document.caveats {
        warn!(caveat = %caveat, "read caveat");
    }

    let mut record = AnalysisRecord {
        file: document.summary(),
        generated,
        overview: None,
        profiles: Vec::new(),
        correlations: None,
        missing: Vec::new(),
        text_stats: None,
        insights: Vec::new(),
    };

    if let Some(table) = document.table() {
        let profile = info_span!("profile").in_scope(|| profile_table_with(table, options));
        record.overview = Some(profile.overview);
        record.profiles = profile.columns;
        record.correlations = profile.correlations;
        record.missing = profile.missing;
    } else if let Some(text) = document.text() {
        record.text_stats =
            Some(info_span!("profile_text").in_scope(|| profile_text_with(text, options)));
    } else {
        return Err(AnalysisError::NoContent);
    }

    record.insights = info_span!("insights").in_scope(|| autoreport_insight::generate(&record));
    info!(
        file = %record.file.filename,
        insights = record.insights.len(),
        "analysis complete"
    );
    Ok(record)
}
