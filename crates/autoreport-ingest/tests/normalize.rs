use proptest::prelude::*;

use autoreport_ingest::{field_value, normalize, parse_number};
use autoreport_model::{ColumnKind, Table};

fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("NA".to_string()),
        Just("true".to_string()),
        Just("FALSE".to_string()),
        (-1000i32..1000).prop_map(|n| n.to_string()),
        (-1.0e6f64..1.0e6).prop_map(|f| f.to_string()),
        "[a-z ]{0,6}",
    ]
}

fn raw_table() -> impl Strategy<Value = Table> {
    (1usize..5, 0usize..8).prop_flat_map(|(width, height)| {
        (
            prop::collection::vec("[ a-c]{0,3}", width),
            prop::collection::vec(prop::collection::vec(cell(), width), height),
        )
            .prop_map(|(headers, rows)| {
                Table::from_rows(
                    headers,
                    rows.iter()
                        .map(|r| r.iter().map(|c| field_value(c)).collect())
                        .collect(),
                )
            })
    })
}

proptest! {
    #[test]
    fn normalize_is_idempotent(table in raw_table()) {
        let once = normalize(table);
        let twice = normalize(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalized_tables_have_no_empty_rows_or_columns(table in raw_table()) {
        let table = normalize(table);
        for column in table.columns() {
            prop_assert!(column.null_count() < column.values.len());
        }
        for idx in 0..table.row_count() {
            prop_assert!(table.row(idx).iter().any(|v| !v.is_null()));
        }
    }

    #[test]
    fn column_names_are_unique_and_trimmed(table in raw_table()) {
        let names = normalize(table).column_names();
        let mut seen = std::collections::HashSet::new();
        for name in &names {
            prop_assert!(!name.is_empty());
            prop_assert_eq!(name.trim(), name.as_str());
            prop_assert!(seen.insert(name.clone()));
        }
    }

    #[test]
    fn integers_always_parse(n in any::<i64>()) {
        prop_assert_eq!(parse_number(&n.to_string()), Some(n as f64));
    }
}

#[test]
fn numeric_column_survives_missing_markers() {
    let table = normalize(Table::from_rows(
        vec!["x".into()],
        vec![
            vec![field_value("1")],
            vec![field_value("NaN")],
            vec![field_value("3")],
        ],
    ));
    assert_eq!(table.columns()[0].kind, ColumnKind::Numeric);
    assert_eq!(table.columns()[0].numbers(), vec![1.0, 3.0]);
}
