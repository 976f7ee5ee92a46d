//! Permissive datetime parsing for keyword-selected columns.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

use autoreport_model::{Column, DatetimeProfile, Value};

const OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

/// Parses a timestamp in one of the accepted layouts.
///
/// RFC 3339 values with an offset are converted to UTC. `YYYY-MM` means
/// the first of the month and a bare four-digit year means January 1.
///
/// # Examples
///
/// ```
/// use autoreport_profile::parse_datetime;
///
/// let dt = parse_datetime("2024-03").unwrap();
/// assert_eq!(dt.to_string(), "2024-03-01 00:00:00");
/// assert!(parse_datetime("not a date").is_none());
/// ```
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt);
    }
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    {
        return date.and_hms_opt(0, 0, 0);
    }
    if s.len() == 7 && s.as_bytes()[4] == b'-' {
        return NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0));
    }
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        return year_start(s.parse().ok()?);
    }
    None
}

fn year_start(year: i32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)
}

fn value_datetime(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::Text(s) => parse_datetime(s),
        Value::Number(n) if n.fract() == 0.0 && (1000.0..=9999.0).contains(n) => {
            year_start(*n as i32)
        }
        Value::Number(_) | Value::Bool(_) | Value::Null => None,
    }
}

/// Profiles the parseable values of `column`; `None` when fewer than two
/// values parse.
pub fn profile_datetime(column: &Column) -> Option<DatetimeProfile> {
    let parsed: Vec<NaiveDateTime> = column.non_null().filter_map(value_datetime).collect();
    if parsed.len() < 2 {
        debug!(column = %column.name, parsed = parsed.len(), "too few datetime values");
        return None;
    }
    let min = parsed.iter().min()?;
    let max = parsed.iter().max()?;
    Some(DatetimeProfile {
        column: column.name.clone(),
        min: min.format(OUTPUT_FORMAT).to_string(),
        max: max.format(OUTPUT_FORMAT).to_string(),
        span_days: (*max - *min).num_days(),
        count: parsed.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoreport_model::ColumnKind;

    fn text(values: &[&str]) -> Column {
        Column::new(
            "created",
            ColumnKind::Text,
            values.iter().map(|v| Value::from(*v)).collect(),
        )
    }

    #[test]
    fn parses_common_layouts() {
        for raw in [
            "2024-01-15",
            "2024-01-15 08:30:00",
            "2024-01-15T08:30:00.250",
            "2024-01-15T08:30:00Z",
            "01/15/2024",
            "15.01.2024",
            "15 January 2024",
            "Jan 15, 2024",
        ] {
            let dt = parse_datetime(raw).unwrap_or_else(|| panic!("{raw}"));
            assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), "{raw}");
        }
    }

    #[test]
    fn offsets_convert_to_utc() {
        let dt = parse_datetime("2024-01-15T02:00:00+03:00").unwrap();
        assert_eq!(dt.format(OUTPUT_FORMAT).to_string(), "2024-01-14 23:00:00");
    }

    #[test]
    fn years_and_months() {
        assert_eq!(parse_datetime("1999").unwrap().to_string(), "1999-01-01 00:00:00");
        assert_eq!(parse_datetime("1999-07").unwrap().to_string(), "1999-07-01 00:00:00");
        assert!(parse_datetime("12345").is_none());
        assert!(parse_datetime("1999-13").is_none());
    }

    #[test]
    fn profile_spans_days() {
        let p = profile_datetime(&text(&["2024-01-01", "bad", "2024-03-01 12:00:00"])).unwrap();
        assert_eq!(p.min, "2024-01-01 00:00:00");
        assert_eq!(p.max, "2024-03-01 12:00:00");
        assert_eq!(p.span_days, 60);
        assert_eq!(p.count, 2);
    }

    #[test]
    fn numeric_years() {
        let column = Column::new(
            "year",
            ColumnKind::Numeric,
            vec![Value::Number(2001.0), Value::Number(2003.0), Value::Number(12.5)],
        );
        let p = profile_datetime(&column).unwrap();
        assert_eq!(p.count, 2);
        assert_eq!(p.span_days, 730);
    }

    #[test]
    fn single_valid_value_is_omitted() {
        assert!(profile_datetime(&text(&["2024-01-01", "nope"])).is_none());
    }
}
