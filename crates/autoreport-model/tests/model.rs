use proptest::prelude::*;

use autoreport_model::{Table, Value, format_thousands, round_to, truncate_chars};

proptest! {
    #[test]
    fn thousands_separators_only_add_commas(value in any::<usize>()) {
        let formatted = format_thousands(value);
        prop_assert_eq!(formatted.replace(',', ""), value.to_string());
        for group in formatted.split(',').skip(1) {
            prop_assert_eq!(group.len(), 3);
        }
    }

    #[test]
    fn rounding_is_idempotent(value in -1.0e9f64..1.0e9, places in 0u32..6) {
        let once = round_to(value, places);
        prop_assert_eq!(round_to(once, places), once);
    }

    #[test]
    fn truncation_keeps_a_char_prefix(text in "\\PC{0,40}", max in 0usize..50) {
        let cut = truncate_chars(&text, max);
        prop_assert!(text.starts_with(cut));
        prop_assert_eq!(cut.chars().count(), text.chars().count().min(max));
    }

    #[test]
    fn rows_are_rectangular(
        width in 1usize..6,
        rows in prop::collection::vec(prop::collection::vec(0u8..9, 0..8), 0..10),
    ) {
        let headers = (0..width).map(|i| format!("c{i}")).collect();
        let body = rows
            .iter()
            .map(|r| r.iter().map(|&v| Value::Number(f64::from(v))).collect())
            .collect();
        let table = Table::from_rows(headers, body);
        prop_assert_eq!(table.column_count(), width);
        prop_assert_eq!(table.row_count(), rows.len());
        for column in table.columns() {
            prop_assert_eq!(column.values.len(), rows.len());
        }
    }
}
