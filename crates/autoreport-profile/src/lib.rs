//! Statistical profiling of normalized tables and free text.
//!
//! [`profile_table`] turns a [`Table`] into a [`TableProfile`]: an
//! overview, per-column numeric, categorical and datetime profiles, a
//! correlation matrix and a missing-value report. [`profile_text`]
//! computes word and sentence statistics for documents without a table.

pub mod categorical;
pub mod correlation;
pub mod datetime;
pub mod numeric;
pub mod options;
pub mod overview;
pub mod stats;
pub mod text;

use tracing::{debug, info};

use autoreport_model::{ColumnKind, ColumnProfile, Table, TableProfile, TextStats};

pub use datetime::parse_datetime;
pub use options::{CORRELATION_DECIMALS, DATETIME_KEYWORDS, ProfileOptions};
pub use text::STOP_WORDS;

/// Profiles `table` with default options.
pub fn profile_table(table: &Table) -> TableProfile {
    profile_table_with(table, &ProfileOptions::default())
}

pub fn profile_table_with(table: &Table, options: &ProfileOptions) -> TableProfile {
    let datetime_candidates: Vec<_> = table
        .columns()
        .iter()
        .filter(|c| options.is_datetime_candidate(&c.name))
        .collect();
    let numeric_columns: Vec<_> = table
        .columns()
        .iter()
        .filter(|c| c.kind == ColumnKind::Numeric)
        .collect();

    let mut columns = Vec::new();
    columns.extend(
        numeric_columns
            .iter()
            .filter_map(|c| numeric::profile_numeric(c))
            .map(ColumnProfile::Numeric),
    );
    columns.extend(
        table
            .columns()
            .iter()
            .filter(|c| c.kind.is_categorical())
            .take(options.max_categorical_columns)
            .map(|c| categorical::profile_categorical(c, options.top_values))
            .map(ColumnProfile::Categorical),
    );
    columns.extend(
        datetime_candidates
            .iter()
            .filter_map(|c| datetime::profile_datetime(c))
            .map(ColumnProfile::Datetime),
    );
    debug!(
        candidates = datetime_candidates.len(),
        profiles = columns.len(),
        "column profiles built"
    );

    let profile = TableProfile {
        overview: overview::overview(table, datetime_candidates.len()),
        columns,
        correlations: correlation::correlations(&numeric_columns, options.top_pairs),
        missing: overview::missing(table),
    };
    info!(
        rows = profile.overview.rows,
        columns = profile.overview.columns,
        "table profiled"
    );
    profile
}

/// Profiles free text with default options.
pub fn profile_text(text: &str) -> TextStats {
    profile_text_with(text, &ProfileOptions::default())
}

pub fn profile_text_with(text: &str, options: &ProfileOptions) -> TextStats {
    let stats = text::profile_text(text, options.top_words);
    info!(words = stats.word_count, sentences = stats.sentence_count, "text profiled");
    stats
}
