//! Frequency profiles for text and boolean columns.

use std::collections::HashMap;

use autoreport_model::{CategoricalProfile, Column, ValueCount, round_to};

/// Counts the non-null values of `column` and keeps the `top` most frequent.
///
/// Values are compared by their display label (`True`/`False` for
/// booleans, shortest form for numbers). Ties keep first-seen order.
pub fn profile_categorical(column: &Column, top: usize) -> CategoricalProfile {
    let mut counts: Vec<ValueCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for value in column.non_null() {
        let label = value.label();
        match index.get(&label) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(label.clone(), counts.len());
                counts.push(ValueCount { value: label, count: 1 });
            }
        }
    }
    let count: usize = counts.iter().map(|vc| vc.count).sum();
    let unique = counts.len();
    // Stable: equal counts stay in first-seen order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(top);

    let (top_value, top_freq) = counts
        .first()
        .map_or((String::new(), 0), |vc| (vc.value.clone(), vc.count));
    let top_pct = if count == 0 {
        0.0
    } else {
        round_to(top_freq as f64 / count as f64 * 100.0, 2)
    };
    CategoricalProfile {
        column: column.name.clone(),
        count,
        unique,
        top_value,
        top_freq,
        top_pct,
        value_counts: counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoreport_model::{ColumnKind, Value};

    fn text(values: &[&str]) -> Column {
        Column::new(
            "c",
            ColumnKind::Text,
            values.iter().map(|v| Value::from(*v)).collect(),
        )
    }

    #[test]
    fn dominant_value() {
        let p = profile_categorical(&text(&["A", "A", "A", "A", "B"]), 10);
        assert_eq!(p.top_value, "A");
        assert_eq!(p.top_freq, 4);
        assert_eq!(p.top_pct, 80.0);
        assert_eq!(p.unique, 2);
        assert_eq!(p.count, 5);
    }

    #[test]
    fn ties_keep_first_seen_order_and_truncate() {
        let p = profile_categorical(&text(&["x", "y", "z", "y", "x", "w"]), 3);
        let order: Vec<&str> = p.value_counts.iter().map(|vc| vc.value.as_str()).collect();
        assert_eq!(order, vec!["x", "y", "z"]);
        assert_eq!(p.unique, 4);
    }

    #[test]
    fn booleans_render_capitalized() {
        let column = Column::new(
            "flag",
            ColumnKind::Boolean,
            vec![Value::Bool(true), Value::Null, Value::Bool(false), Value::Bool(true)],
        );
        let p = profile_categorical(&column, 10);
        assert_eq!(p.top_value, "True");
        assert_eq!(p.count, 3);
        assert_eq!(p.top_pct, 66.67);
    }
}
