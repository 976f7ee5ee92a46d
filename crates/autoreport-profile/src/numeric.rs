//! Distribution statistics for numeric columns.

use autoreport_model::{Column, NumericProfile, round_to};

use crate::stats::Sample;

/// Decimal places for reported statistics other than percentages.
const STAT_DECIMALS: u32 = 4;
/// Decimal places for percentages.
const PCT_DECIMALS: u32 = 2;
/// Tukey fence multiplier.
const FENCE_K: f64 = 1.5;

/// Profiles the non-null values of `column`; `None` when it has none.
pub fn profile_numeric(column: &Column) -> Option<NumericProfile> {
    let values = column.numbers();
    let sample = Sample::new(&values);
    let mean = sample.mean()?;

    let q = |p: f64| sample.quantile(p).unwrap_or(f64::NAN);
    let (q1, median, q3) = (q(0.25), q(0.5), q(0.75));
    let min = sample.min().unwrap_or(f64::NAN);
    let max = sample.max().unwrap_or(f64::NAN);
    let std = sample.std();
    let iqr = q3 - q1;
    let lower_fence = q1 - FENCE_K * iqr;
    let upper_fence = q3 + FENCE_K * iqr;
    let outlier_count = values
        .iter()
        .filter(|&&v| v < lower_fence || v > upper_fence)
        .count();
    let count = values.len();
    let cv = if mean == 0.0 {
        0.0
    } else {
        round_to(std / mean * 100.0, PCT_DECIMALS)
    };

    let r = |v: f64| round_to(v, STAT_DECIMALS);
    Some(NumericProfile {
        column: column.name.clone(),
        count,
        mean: r(mean),
        median: r(median),
        std: r(std),
        min: r(min),
        max: r(max),
        q1: r(q1),
        q3: r(q3),
        iqr: r(iqr),
        range: r(max - min),
        cv,
        skewness: r(sample.skewness()),
        kurtosis: r(sample.kurtosis()),
        zeros: values.iter().filter(|&&v| v == 0.0).count(),
        negative: values.iter().filter(|&&v| v < 0.0).count(),
        lower_fence: r(lower_fence),
        upper_fence: r(upper_fence),
        outlier_count,
        outlier_pct: round_to(outlier_count as f64 / count as f64 * 100.0, PCT_DECIMALS),
    })
}
