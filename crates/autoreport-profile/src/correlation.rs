//! Pairwise Pearson correlations between numeric columns.

use autoreport_model::{Column, CorrelationMatrix, CorrelationPair, Value, round_to};

use crate::options::CORRELATION_DECIMALS;
use crate::stats;

/// Builds the correlation matrix over `columns`; `None` below two columns.
///
/// Each entry uses the rows where both columns are non-null. The matrix is
/// symmetric; entries are `None` where the correlation is undefined. The
/// `top` strongest distinct pairs are kept, ties in first-encountered
/// order.
pub fn correlations(columns: &[&Column], top: usize) -> Option<CorrelationMatrix> {
    if columns.len() < 2 {
        return None;
    }
    let k = columns.len();
    let mut values = vec![vec![None; k]; k];
    for i in 0..k {
        for j in i..k {
            let pairs = paired(columns[i], columns[j]);
            let r = stats::pearson(&pairs).map(|r| {
                if i == j {
                    1.0
                } else {
                    round_to(r, CORRELATION_DECIMALS)
                }
            });
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    let mut top_pairs = Vec::new();
    for i in 0..k {
        for j in (i + 1)..k {
            if let Some(r) = values[i][j] {
                top_pairs.push(CorrelationPair {
                    col1: columns[i].name.clone(),
                    col2: columns[j].name.clone(),
                    r,
                });
            }
        }
    }
    top_pairs.sort_by(|a, b| b.r.abs().total_cmp(&a.r.abs()));
    top_pairs.truncate(top);

    Some(CorrelationMatrix {
        columns: columns.iter().map(|c| c.name.clone()).collect(),
        values,
        top_pairs,
    })
}

fn paired(a: &Column, b: &Column) -> Vec<(f64, f64)> {
    a.values
        .iter()
        .zip(&b.values)
        .filter_map(|(x, y)| Some((Value::as_f64(x)?, Value::as_f64(y)?)))
        .collect()
}
