//! Narrative insights derived from an [`AnalysisRecord`].
//!
//! Rules live in a fixed, ordered table ([`RULES`]). [`generate`] walks
//! the table once and keeps the first [`MAX_INSIGHTS`] insights, so the
//! output is stable across runs.

pub mod rules;

use tracing::debug;

use autoreport_model::{AnalysisRecord, Insight};

pub use rules::{RULES, Rule};

/// Upper bound on insights per record.
pub const MAX_INSIGHTS: usize = 12;

/// Evaluates [`RULES`] against `record`.
pub fn generate(record: &AnalysisRecord) -> Vec<Insight> {
    generate_with(RULES, record, MAX_INSIGHTS)
}

/// Evaluates `rules` in order and keeps the first `cap` insights.
pub fn generate_with(rules: &[Rule], record: &AnalysisRecord, cap: usize) -> Vec<Insight> {
    let insights: Vec<Insight> = rules
        .iter()
        .flat_map(|rule| {
            let found = (rule.evaluate)(record);
            if !found.is_empty() {
                debug!(rule = rule.name, count = found.len(), "rule fired");
            }
            found
        })
        .take(cap)
        .collect();
    debug!(count = insights.len(), "insights generated");
    insights
}
