//! Table-level overview and per-column missing counts.

use std::collections::HashSet;

use autoreport_model::{ColumnKind, MissingColumn, Overview, Table, Value, round_to};

/// Pointer slot per cell in an object column.
const POINTER_BYTES: usize = 8;
/// Fixed cost of a default row index.
const INDEX_BYTES: usize = 132;
const STR_HEADER_BYTES: usize = 49;
const NULL_OBJECT_BYTES: usize = 16;
const FLOAT_OBJECT_BYTES: usize = 24;
const BOOL_OBJECT_BYTES: usize = 28;

pub fn overview(table: &Table, datetime_cols: usize) -> Overview {
    let rows = table.row_count();
    let columns = table.column_count();
    let total_cells = rows * columns;
    let missing_cells: usize = table.columns().iter().map(|c| c.null_count()).sum();
    Overview {
        rows,
        columns,
        numeric_cols: table
            .columns()
            .iter()
            .filter(|c| c.kind == ColumnKind::Numeric)
            .count(),
        categorical_cols: table
            .columns()
            .iter()
            .filter(|c| c.kind.is_categorical())
            .count(),
        datetime_cols,
        total_cells,
        missing_cells,
        missing_pct: round_to(missing_cells as f64 / total_cells.max(1) as f64 * 100.0, 2),
        duplicate_rows: duplicate_rows(table),
        memory_kb: round_to(memory_bytes(table) as f64 / 1024.0, 2),
        col_names: table.column_names(),
    }
}

/// Rows identical to an earlier row.
pub fn duplicate_rows(table: &Table) -> usize {
    let mut seen = HashSet::with_capacity(table.row_count());
    (0..table.row_count())
        .filter(|&idx| !seen.insert(table.row(idx)))
        .count()
}

/// Approximate in-memory footprint of the table, in bytes.
///
/// Numeric columns cost 8 bytes per row and boolean columns 1 byte; other
/// columns are costed as boxed objects (a pointer plus the object).
pub fn memory_bytes(table: &Table) -> usize {
    let rows = table.row_count();
    let data: usize = table
        .columns()
        .iter()
        .map(|column| match column.kind {
            ColumnKind::Numeric => 8 * rows,
            ColumnKind::Boolean if column.null_count() == 0 => rows,
            ColumnKind::Boolean | ColumnKind::Text => {
                column.values.iter().map(object_bytes).sum()
            }
        })
        .sum();
    INDEX_BYTES + data
}

fn object_bytes(value: &Value) -> usize {
    POINTER_BYTES
        + match value {
            Value::Null => NULL_OBJECT_BYTES,
            Value::Bool(_) => BOOL_OBJECT_BYTES,
            Value::Number(_) => FLOAT_OBJECT_BYTES,
            Value::Text(s) => STR_HEADER_BYTES + s.len(),
        }
}

/// Columns with at least one null, in column order.
pub fn missing(table: &Table) -> Vec<MissingColumn> {
    let rows = table.row_count().max(1) as f64;
    table
        .columns()
        .iter()
        .filter_map(|column| {
            let count = column.null_count();
            (count > 0).then(|| MissingColumn {
                column: column.name.clone(),
                count,
                pct: round_to(count as f64 / rows * 100.0, 2),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoreport_model::Column;

    fn sample() -> Table {
        Table::from_columns(vec![
            Column::new(
                "n",
                ColumnKind::Numeric,
                vec![1.0.into(), 1.0.into(), Value::Null, 1.0.into()],
            ),
            Column::new(
                "s",
                ColumnKind::Text,
                vec!["ab".into(), "ab".into(), "c".into(), "ab".into()],
            ),
        ])
    }

    #[test]
    fn overview_counts() {
        let ov = overview(&sample(), 0);
        assert_eq!(ov.rows, 4);
        assert_eq!(ov.columns, 2);
        assert_eq!(ov.numeric_cols, 1);
        assert_eq!(ov.categorical_cols, 1);
        assert_eq!(ov.total_cells, 8);
        assert_eq!(ov.missing_cells, 1);
        assert_eq!(ov.missing_pct, 12.5);
        assert_eq!(ov.duplicate_rows, 2);
        assert_eq!(ov.col_names, vec!["n", "s"]);
    }

    #[test]
    fn memory_estimate() {
        // index + 4 * 8 numeric + 3 * (8 + 49 + 2) + (8 + 49 + 1)
        assert_eq!(memory_bytes(&sample()), 132 + 32 + 177 + 58);
    }

    #[test]
    fn missing_report_lists_only_columns_with_nulls() {
        let report = missing(&sample());
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].column, "n");
        assert_eq!(report[0].count, 1);
        assert_eq!(report[0].pct, 25.0);
    }
}
