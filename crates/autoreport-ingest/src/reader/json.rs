//! JSON reader.
//!
//! A list of objects becomes one row per object; an object whose first
//! list-valued entry holds records uses that list; any other object is a
//! single row. Nested objects flatten into dotted column names.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value as Json};
use tracing::debug;

use autoreport_model::{FormatTag, Table, Value, truncate_chars};

use crate::encoding::{TextEncoding, decode_with_fallback};
use crate::error::Result;
use crate::normalize::normalize;
use crate::options::ReaderOptions;

use super::{FormatReader, ReadOutput};

#[derive(Debug, Clone, Copy)]
pub struct JsonReader;

impl FormatReader for JsonReader {
    fn format(&self) -> FormatTag {
        FormatTag::Json
    }

    fn read(&self, path: &Path, options: &ReaderOptions) -> Result<ReadOutput> {
        let bytes = fs::read(path)?;
        let decoded = decode_with_fallback(&bytes, &[TextEncoding::Utf8])?;
        let root: Json = serde_json::from_str(&decoded.text)?;
        let table = normalize(flatten_json(&root));
        let pretty = serde_json::to_string_pretty(&root)?;
        Ok(ReadOutput {
            primary_table: Some(table),
            text: Some(truncate_chars(&pretty, options.json_excerpt_chars).to_string()),
            raw_json: Some(root),
            encoding: Some(decoded.encoding.label().to_string()),
            ..ReadOutput::default()
        })
    }
}

/// Flattens a JSON value into a raw table.
///
/// Returns an empty table when the rows are not objects.
pub fn flatten_json(root: &Json) -> Table {
    let records = match root {
        Json::Array(items) => objects(items),
        Json::Object(map) => match map.values().find_map(Json::as_array) {
            Some(items) => objects(items),
            None => Some(vec![map]),
        },
        _ => None,
    };
    let Some(records) = records.filter(|r| !r.is_empty()) else {
        debug!("json has no uniform record rows");
        return Table::empty();
    };

    let mut headers: Vec<String> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<Vec<Value>> = Vec::with_capacity(records.len());
    for record in records {
        let mut cells = Vec::new();
        flatten_object("", record, &mut cells);
        let mut row = vec![Value::Null; headers.len()];
        for (key, value) in cells {
            let col = *index.entry(key.clone()).or_insert_with(|| {
                headers.push(key);
                headers.len() - 1
            });
            if col >= row.len() {
                row.resize(col + 1, Value::Null);
            }
            row[col] = value;
        }
        rows.push(row);
    }
    Table::from_rows(headers, rows)
}

/// Every item as an object, or `None` if any item is not one.
fn objects(items: &[Json]) -> Option<Vec<&Map<String, Json>>> {
    items.iter().map(Json::as_object).collect()
}

fn flatten_object(prefix: &str, object: &Map<String, Json>, out: &mut Vec<(String, Value)>) {
    for (key, value) in object {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Json::Object(nested) => flatten_object(&name, nested, out),
            Json::Array(_) => out.push((name, Value::Text(value.to_string()))),
            Json::Null => out.push((name, Value::Null)),
            Json::Bool(b) => out.push((name, Value::Bool(*b))),
            Json::Number(n) => out.push((name, n.as_f64().map_or(Value::Null, Value::number))),
            Json::String(s) => out.push((name, Value::Text(s.clone()))),
        }
    }
}
