//! Table normalization and per-column type inference.
//!
//! Normalization trims and de-duplicates column names, drops rows and
//! columns that are entirely null, and settles each column's type:
//!
//! - **numeric** when every non-null value is a number or text matching
//!   the grammar of [`parse_number`];
//! - **boolean** when every non-null value is a boolean or one of the
//!   tokens accepted by [`parse_bool`];
//! - **text** otherwise, with values left untouched.
//!
//! Applying [`normalize`] to its own output returns an identical table.

use std::collections::HashSet;

use tracing::debug;

use autoreport_model::{Column, ColumnKind, Table, Value};

/// Markers that read as a missing value in delimited and sheet input.
pub const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Converts a raw text field into a cell, mapping missing markers to null.
pub fn field_value(raw: &str) -> Value {
    if MISSING_MARKERS.contains(&raw) {
        Value::Null
    } else {
        Value::Text(raw.to_string())
    }
}

/// Parses `raw` as a number under a fixed, locale-independent grammar.
///
/// After trimming ASCII whitespace: an optional sign, digits with at most
/// one `.` (and at least one digit), then an optional exponent `e`/`E`
/// with optional sign and at least one digit. Thousands separators,
/// decimal commas, `inf` and `nan` are rejected.
///
/// # Examples
///
/// ```
/// use autoreport_ingest::parse_number;
///
/// assert_eq!(parse_number(" -1.5e3 "), Some(-1500.0));
/// assert_eq!(parse_number(".5"), Some(0.5));
/// assert_eq!(parse_number("1,000"), None);
/// assert_eq!(parse_number("inf"), None);
/// ```
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_matches(|c: char| c.is_ascii_whitespace());
    let body = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(idx) => (&body[..idx], Some(&body[idx + 1..])),
        None => (body, None),
    };
    let mut digits = 0usize;
    let mut dots = 0usize;
    for ch in mantissa.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return None,
        }
    }
    if digits == 0 || dots > 1 {
        return None;
    }
    if let Some(exponent) = exponent {
        let exp_digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if exp_digits.is_empty() || !exp_digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses the boolean tokens `true`/`True`/`TRUE` and `false`/`False`/`FALSE`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" | "True" | "TRUE" => Some(true),
        "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(v) => Some(*v),
        Value::Text(s) => parse_number(s),
        Value::Null | Value::Bool(_) => None,
    }
}

fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Text(s) => parse_bool(s),
        Value::Null | Value::Number(_) => None,
    }
}

/// Normalizes a raw table into its canonical form.
pub fn normalize(table: Table) -> Table {
    let columns = table.into_columns();
    let names = unique_names(&columns);
    let height = columns.first().map_or(0, |c| c.values.len());
    let keep_rows: Vec<usize> = (0..height)
        .filter(|&row| columns.iter().any(|c| !c.values[row].is_null()))
        .collect();
    if keep_rows.len() < height {
        debug!(dropped = height - keep_rows.len(), "dropped empty rows");
    }

    let normalized: Vec<Column> = columns
        .into_iter()
        .zip(names)
        .filter_map(|(mut column, name)| {
            let values: Vec<Value> = keep_rows
                .iter()
                .map(|&row| std::mem::take(&mut column.values[row]))
                .collect();
            if values.iter().all(Value::is_null) {
                debug!(column = %name, "dropped empty column");
                return None;
            }
            Some(infer_column(name, values))
        })
        .collect();
    Table::from_columns(normalized)
}

fn infer_column(name: String, values: Vec<Value>) -> Column {
    let mut non_null = values.iter().filter(|v| !v.is_null());
    if non_null.clone().all(|v| coerce_number(v).is_some()) {
        let values = values
            .iter()
            .map(|v| coerce_number(v).map_or(Value::Null, Value::Number))
            .collect();
        return Column::new(name, ColumnKind::Numeric, values);
    }
    if non_null.all(|v| coerce_bool(v).is_some()) {
        let values = values
            .iter()
            .map(|v| coerce_bool(v).map_or(Value::Null, Value::Bool))
            .collect();
        return Column::new(name, ColumnKind::Boolean, values);
    }
    Column::new(name, ColumnKind::Text, values)
}

/// Trimmed, non-empty, collision-free column names in column order.
///
/// Empty names become `Unnamed: <index>`; repeats get `.1`, `.2`, …
/// suffixes that avoid every other name in the table.
fn unique_names(columns: &[Column]) -> Vec<String> {
    let trimmed: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(idx, c)| {
            let name = c.name.trim();
            if name.is_empty() {
                format!("Unnamed: {idx}")
            } else {
                name.to_string()
            }
        })
        .collect();
    let originals: HashSet<&str> = trimmed.iter().map(String::as_str).collect();
    let mut taken: HashSet<String> = HashSet::with_capacity(trimmed.len());
    let mut names = Vec::with_capacity(trimmed.len());
    for name in &trimmed {
        let mut candidate = name.clone();
        let mut suffix = 1usize;
        while taken.contains(&candidate)
            || (candidate != *name && originals.contains(candidate.as_str()))
        {
            candidate = format!("{name}.{suffix}");
            suffix += 1;
        }
        taken.insert(candidate.clone());
        names.push(candidate);
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::from_rows(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| field_value(c)).collect())
                .collect(),
        )
    }

    #[test]
    fn test_parse_number_grammar() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("+3."), Some(3.0));
        assert_eq!(parse_number("1E-2"), Some(0.01));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("1.2.3"), None);
        assert_eq!(parse_number("1e"), None);
        assert_eq!(parse_number("1,5"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("1e999"), None);
        assert_eq!(parse_number("0x10"), None);
    }

    #[test]
    fn test_parse_bool_tokens() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("False"), Some(false));
        assert_eq!(parse_bool("yes"), None);
    }

    #[test]
    fn missing_markers_become_null() {
        assert_eq!(field_value("NA"), Value::Null);
        assert_eq!(field_value(""), Value::Null);
        assert_eq!(field_value(" "), Value::Text(" ".into()));
    }

    #[test]
    fn infers_column_kinds() {
        let table = normalize(raw(
            &["n", "b", "t"],
            &[&["1", "true", "x"], &["2.5", "False", "2"], &["", "", "y"]],
        ));
        let kinds: Vec<ColumnKind> = table.columns().iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ColumnKind::Numeric, ColumnKind::Boolean, ColumnKind::Text]
        );
        assert_eq!(table.columns()[0].values[1], Value::Number(2.5));
        assert_eq!(table.columns()[1].values[1], Value::Bool(false));
        assert_eq!(table.columns()[2].values[1], Value::Text("2".into()));
    }

    #[test]
    fn one_bad_value_keeps_column_as_text() {
        let table = normalize(raw(&["price"], &[&["1"], &["2"], &["n/x"]]));
        assert_eq!(table.columns()[0].kind, ColumnKind::Text);
    }

    #[test]
    fn drops_empty_rows_and_columns() {
        let table = normalize(raw(
            &["a", "empty", "b"],
            &[&["1", "", "x"], &["", "", ""], &["3", "", "z"]],
        ));
        assert_eq!(table.column_names(), vec!["a", "b"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.columns()[0].values, vec![Value::Number(1.0), Value::Number(3.0)]);
    }

    #[test]
    fn names_are_trimmed_and_unique() {
        let table = normalize(raw(
            &[" id ", "id", "", "id.1"],
            &[&["1", "2", "3", "4"]],
        ));
        assert_eq!(
            table.column_names(),
            vec!["id", "id.2", "Unnamed: 2", "id.1"]
        );
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let once = normalize(raw(
            &[" a", "a ", "flag", ""],
            &[&["1", "x", "TRUE", ""], &["", "", "", ""], &["2", "3", "false", "k"]],
        ));
        let twice = normalize(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_table_stays_empty() {
        assert!(normalize(Table::empty()).is_empty());
    }
}
