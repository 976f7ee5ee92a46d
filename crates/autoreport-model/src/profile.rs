//! Statistical profile types produced by the profilers.
//!
//! Per-column profiles serialize as maps keyed by column name, in column
//! order; the `column` field itself is not repeated inside each entry.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Items that serialize as entries of a map keyed by column name.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl<T: Keyed + ?Sized> Keyed for &T {
    fn key(&self) -> &str {
        (**self).key()
    }
}

/// Serializes a slice of keyed items as an ordered map.
pub fn serialize_keyed<S, T>(items: &[T], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Keyed + Serialize,
{
    serializer.collect_map(items.iter().map(|item| (item.key(), item)))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Overview {
    pub rows: usize,
    pub columns: usize,
    pub numeric_cols: usize,
    pub categorical_cols: usize,
    pub datetime_cols: usize,
    pub total_cells: usize,
    pub missing_cells: usize,
    pub missing_pct: f64,
    pub duplicate_rows: usize,
    pub memory_kb: f64,
    pub col_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericProfile {
    #[serde(skip)]
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub range: f64,
    pub cv: f64,
    pub skewness: f64,
    pub kurtosis: f64,
    pub zeros: usize,
    pub negative: usize,
    pub lower_fence: f64,
    pub upper_fence: f64,
    pub outlier_count: usize,
    pub outlier_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalProfile {
    #[serde(skip)]
    pub column: String,
    pub count: usize,
    pub unique: usize,
    pub top_value: String,
    pub top_freq: usize,
    pub top_pct: f64,
    #[serde(serialize_with = "serialize_value_counts")]
    pub value_counts: Vec<ValueCount>,
}

fn serialize_value_counts<S: Serializer>(
    counts: &[ValueCount],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(counts.iter().map(|vc| (vc.value.as_str(), vc.count)))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatetimeProfile {
    #[serde(skip)]
    pub column: String,
    pub min: String,
    pub max: String,
    pub span_days: i64,
    pub count: usize,
}

/// Profile of one column, tagged by the kind of statistics computed.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnProfile {
    Numeric(NumericProfile),
    Categorical(CategoricalProfile),
    Datetime(DatetimeProfile),
}

impl ColumnProfile {
    pub fn column(&self) -> &str {
        match self {
            Self::Numeric(p) => &p.column,
            Self::Categorical(p) => &p.column,
            Self::Datetime(p) => &p.column,
        }
    }
}

impl Keyed for NumericProfile {
    fn key(&self) -> &str {
        &self.column
    }
}

impl Keyed for CategoricalProfile {
    fn key(&self) -> &str {
        &self.column
    }
}

impl Keyed for DatetimeProfile {
    fn key(&self) -> &str {
        &self.column
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationPair {
    pub col1: String,
    pub col2: String,
    pub r: f64,
}

/// Pearson correlations between numeric columns.
///
/// `values[i][j]` is `None` where the correlation is undefined (fewer
/// than two paired observations or zero variance).
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
    pub top_pairs: Vec<CorrelationPair>,
}

impl CorrelationMatrix {
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        self.values[i][j]
    }
}

struct MatrixRow<'a> {
    columns: &'a [String],
    values: &'a [Option<f64>],
}

impl Serialize for MatrixRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in self.columns.iter().zip(self.values) {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct MatrixView<'a>(&'a CorrelationMatrix);

impl Serialize for MatrixView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let matrix = self.0;
        let mut map = serializer.serialize_map(Some(matrix.columns.len()))?;
        for (name, row) in matrix.columns.iter().zip(&matrix.values) {
            map.serialize_entry(
                name,
                &MatrixRow {
                    columns: &matrix.columns,
                    values: row,
                },
            )?;
        }
        map.end()
    }
}

impl Serialize for CorrelationMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("matrix", &MatrixView(self))?;
        map.serialize_entry("top_pairs", &self.top_pairs)?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingColumn {
    #[serde(skip)]
    pub column: String,
    pub count: usize,
    pub pct: f64,
}

impl Keyed for MissingColumn {
    fn key(&self) -> &str {
        &self.column
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStats {
    pub char_count: usize,
    pub word_count: usize,
    pub unique_words: usize,
    pub sentence_count: usize,
    pub line_count: usize,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    pub top_words: Vec<WordCount>,
    pub lexical_diversity: f64,
}

/// Everything the statistical profiler derives from one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableProfile {
    pub overview: Overview,
    pub columns: Vec<ColumnProfile>,
    pub correlations: Option<CorrelationMatrix>,
    pub missing: Vec<MissingColumn>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> CorrelationMatrix {
        CorrelationMatrix {
            columns: vec!["a".into(), "b".into()],
            values: vec![vec![Some(1.0), Some(0.5)], vec![Some(0.5), Some(1.0)]],
            top_pairs: vec![CorrelationPair {
                col1: "a".into(),
                col2: "b".into(),
                r: 0.5,
            }],
        }
    }

    #[test]
    fn matrix_lookup_by_name() {
        let m = matrix();
        assert_eq!(m.get("a", "b"), Some(0.5));
        assert_eq!(m.get("a", "zzz"), None);
    }

    #[test]
    fn matrix_serializes_as_nested_maps() {
        let json = serde_json::to_value(matrix()).expect("serialize matrix");
        assert_eq!(json["matrix"]["b"]["a"], serde_json::json!(0.5));
        assert_eq!(json["top_pairs"][0]["col2"], serde_json::json!("b"));
    }

    #[test]
    fn value_counts_serialize_in_rank_order() {
        let profile = CategoricalProfile {
            column: "grade".into(),
            count: 3,
            unique: 2,
            top_value: "B".into(),
            top_freq: 2,
            top_pct: 66.67,
            value_counts: vec![
                ValueCount {
                    value: "B".into(),
                    count: 2,
                },
                ValueCount {
                    value: "A".into(),
                    count: 1,
                },
            ],
        };
        let json = serde_json::to_string(&profile).expect("serialize profile");
        assert!(json.contains(r#""value_counts":{"B":2,"A":1}"#));
        assert!(!json.contains("grade"));
    }
}
