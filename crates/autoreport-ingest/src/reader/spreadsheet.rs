//! Excel workbook reader (`.xlsx`, `.xls`).

use std::path::Path;

use calamine::{Data, DataType, Range, Reader, open_workbook_auto};
use tracing::debug;

use autoreport_model::{FormatTag, NamedTable, Table, Value};

use crate::error::{IngestError, Result};
use crate::normalize::{field_value, normalize};
use crate::options::ReaderOptions;

use super::{FormatReader, ReadOutput};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reads every sheet; the first one is the primary table.
#[derive(Debug, Clone, Copy)]
pub struct SpreadsheetReader;

impl FormatReader for SpreadsheetReader {
    fn format(&self) -> FormatTag {
        FormatTag::Excel
    }

    fn read(&self, path: &Path, _options: &ReaderOptions) -> Result<ReadOutput> {
        let mut workbook = open_workbook_auto(path)?;
        let sheet_names = workbook.sheet_names();
        let Some(first) = sheet_names.first().cloned() else {
            return Err(IngestError::Parse("workbook has no sheets".to_string()));
        };

        let mut sheets = Vec::with_capacity(sheet_names.len());
        for name in &sheet_names {
            let range = workbook.worksheet_range(name)?;
            let table = normalize(range_to_table(&range));
            debug!(sheet = %name, rows = table.row_count(), "sheet read");
            sheets.push(NamedTable {
                name: name.clone(),
                table,
            });
        }

        let mut caveats = Vec::new();
        if sheet_names.len() > 1 {
            caveats.push(format!(
                "workbook has {} sheets; using first sheet '{first}'",
                sheet_names.len()
            ));
        }
        let mut sheets = sheets.into_iter();
        let primary = sheets.next().map(|sheet| sheet.table);
        Ok(ReadOutput {
            primary_table: primary,
            side_tables: sheets.collect(),
            sheet_names,
            caveats,
            ..ReadOutput::default()
        })
    }
}

fn range_to_table(range: &Range<Data>) -> Table {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Table::empty();
    };
    let headers = header
        .iter()
        .enumerate()
        .map(|(idx, cell)| match cell_value(cell) {
            Value::Null => format!("Unnamed: {idx}"),
            value => value.label(),
        })
        .collect();
    let body = rows
        .map(|row| row.iter().map(cell_value).collect())
        .collect();
    Table::from_rows(headers, body)
}

fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => Value::Null,
        Data::String(s) => field_value(s),
        Data::Int(i) => Value::number(*i as f64),
        Data::Float(f) => Value::number(*f),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(_) => cell
            .as_datetime()
            .map_or(Value::Null, |dt| Value::Text(dt.format(DATETIME_FORMAT).to_string())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::Text(s.clone()),
    }
}
