//! Delimiter sniffing for free text.
//!
//! A text body is treated as a table when its first non-empty line
//! contains one of the candidate delimiters and the first few non-empty
//! lines all split into the same number of fields.

use tracing::debug;

use autoreport_model::Table;

use crate::normalize::field_value;

/// Candidate delimiters, in the order they are tried.
pub const SNIFF_DELIMITERS: [char; 4] = [',', '\t', ';', '|'];

/// Reinterprets `text` as a raw table, or returns `None` when no delimiter
/// produces a consistent field count over the first `probe_lines` lines.
///
/// The first non-empty line is the header. Later rows with more fields
/// than the header are skipped; shorter rows are padded with nulls.
pub fn sniff_table(text: &str, probe_lines: usize) -> Option<Table> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let first = lines.first()?;

    for delimiter in SNIFF_DELIMITERS {
        if !first.contains(delimiter) {
            continue;
        }
        let rows: Vec<Vec<&str>> = lines
            .iter()
            .map(|line| line.split(delimiter).collect())
            .collect();
        let width = rows[0].len();
        if !rows.iter().take(probe_lines.max(1)).all(|r| r.len() == width) {
            debug!(delimiter = ?delimiter, "inconsistent field counts");
            continue;
        }

        let headers = rows[0].iter().map(|h| (*h).to_string()).collect();
        let body: Vec<_> = rows[1..]
            .iter()
            .filter(|r| r.len() <= width)
            .map(|r| r.iter().map(|cell| field_value(cell)).collect())
            .collect();
        debug!(delimiter = ?delimiter, rows = body.len(), "text reinterpreted as table");
        return Some(Table::from_rows(headers, body));
    }
    None
}
