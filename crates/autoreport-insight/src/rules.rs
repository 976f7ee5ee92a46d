//! Insight rules, evaluated in table order.
//!
//! Each rule reads the finished [`AnalysisRecord`] and emits zero or more
//! insights. Thresholds are fixed.

use autoreport_model::{AnalysisRecord, Insight, format_thousands};

const LARGE_DATASET_ROWS: usize = 100_000;
const SMALL_SAMPLE_ROWS: usize = 30;
const HIGH_MISSING_PCT: f64 = 20.0;
const MODERATE_MISSING_PCT: f64 = 5.0;
const OUTLIER_PCT: f64 = 10.0;
const SKEWNESS: f64 = 2.0;
const STRONG_CORRELATION: f64 = 0.8;
/// Leading correlation pairs inspected for strong correlations.
const CORRELATION_PAIRS_CHECKED: usize = 3;
const DOMINANT_PCT: f64 = 70.0;
const LOW_DIVERSITY: f64 = 0.3;

/// A named insight rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub evaluate: fn(&AnalysisRecord) -> Vec<Insight>,
}

/// All rules in evaluation order.
pub const RULES: &[Rule] = &[
    Rule {
        name: "dataset-size",
        evaluate: dataset_size,
    },
    Rule {
        name: "missing-data",
        evaluate: missing_data,
    },
    Rule {
        name: "duplicate-rows",
        evaluate: duplicate_rows,
    },
    Rule {
        name: "outliers",
        evaluate: outliers,
    },
    Rule {
        name: "skewness",
        evaluate: skewness,
    },
    Rule {
        name: "strong-correlation",
        evaluate: strong_correlation,
    },
    Rule {
        name: "dominant-category",
        evaluate: dominant_category,
    },
    Rule {
        name: "text",
        evaluate: text,
    },
];

fn dataset_size(record: &AnalysisRecord) -> Vec<Insight> {
    let rows = record.row_count();
    if rows > LARGE_DATASET_ROWS {
        vec![Insight::new(
            "Large Dataset",
            format!(
                "Dataset has {} rows; well suited for statistical modeling.",
                format_thousands(rows)
            ),
        )]
    } else if rows > 0 && rows < SMALL_SAMPLE_ROWS {
        vec![Insight::new(
            "Small Sample",
            format!("Only {rows} rows detected; interpret statistics cautiously."),
        )]
    } else {
        Vec::new()
    }
}

fn missing_data(record: &AnalysisRecord) -> Vec<Insight> {
    let Some(pct) = record.overview.as_ref().map(|o| o.missing_pct) else {
        return Vec::new();
    };
    if pct > HIGH_MISSING_PCT {
        vec![Insight::new(
            "High Missing Data",
            format!("{pct:.1}% of cells are missing; consider imputation."),
        )]
    } else if pct > MODERATE_MISSING_PCT {
        vec![Insight::new(
            "Moderate Missing Data",
            format!("{pct:.1}% missing cells detected."),
        )]
    } else {
        Vec::new()
    }
}

fn duplicate_rows(record: &AnalysisRecord) -> Vec<Insight> {
    match record.overview.as_ref().map(|o| o.duplicate_rows) {
        Some(dups) if dups > 0 => vec![Insight::new(
            "Duplicate Rows",
            format!(
                "{} duplicate rows found; deduplication recommended.",
                format_thousands(dups)
            ),
        )],
        _ => Vec::new(),
    }
}

fn outliers(record: &AnalysisRecord) -> Vec<Insight> {
    record
        .numeric()
        .filter(|p| p.outlier_pct > OUTLIER_PCT)
        .map(|p| {
            Insight::new(
                "Outliers Detected",
                format!(
                    "Column '{}' has {:?}% outliers (IQR method).",
                    p.column, p.outlier_pct
                ),
            )
        })
        .collect()
}

fn skewness(record: &AnalysisRecord) -> Vec<Insight> {
    record
        .numeric()
        .filter(|p| p.skewness.abs() > SKEWNESS)
        .map(|p| {
            let direction = if p.skewness > 0.0 {
                "positively"
            } else {
                "negatively"
            };
            Insight::new(
                "Skewed Distribution",
                format!(
                    "'{}' is strongly {direction} skewed (skewness={:.2}).",
                    p.column, p.skewness
                ),
            )
        })
        .collect()
}

fn strong_correlation(record: &AnalysisRecord) -> Vec<Insight> {
    let Some(matrix) = &record.correlations else {
        return Vec::new();
    };
    matrix
        .top_pairs
        .iter()
        .take(CORRELATION_PAIRS_CHECKED)
        .filter(|pair| pair.r.abs() >= STRONG_CORRELATION)
        .map(|pair| {
            Insight::new(
                "Strong Correlation",
                format!(
                    "'{}' and '{}' are strongly correlated (r={:.3}).",
                    pair.col1, pair.col2, pair.r
                ),
            )
        })
        .collect()
}

fn dominant_category(record: &AnalysisRecord) -> Vec<Insight> {
    record
        .categorical()
        .filter(|p| p.top_pct > DOMINANT_PCT)
        .map(|p| {
            Insight::new(
                "Dominant Category",
                format!(
                    "'{}' dominates '{}' at {:.1}%.",
                    p.top_value, p.column, p.top_pct
                ),
            )
        })
        .collect()
}

fn text(record: &AnalysisRecord) -> Vec<Insight> {
    let Some(stats) = &record.text_stats else {
        return Vec::new();
    };
    let mut insights = Vec::new();
    if stats.lexical_diversity < LOW_DIVERSITY {
        insights.push(Insight::new(
            "Low Lexical Diversity",
            format!(
                "Text has low diversity ({:.2}); possibly repetitive.",
                stats.lexical_diversity
            ),
        ));
    }
    insights.push(Insight::new(
        "Document Size",
        format!(
            "{} words across {} sentences.",
            format_thousands(stats.word_count),
            format_thousands(stats.sentence_count)
        ),
    ));
    insights
}
