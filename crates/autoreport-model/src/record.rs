//! The analysis record handed to report renderers.

use serde::ser::Serializer;
use serde::Serialize;

use crate::document::DocumentSummary;
use crate::profile::{
    CategoricalProfile, ColumnProfile, CorrelationMatrix, DatetimeProfile, MissingColumn,
    NumericProfile, Overview, TextStats, serialize_keyed,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub category: String,
    pub message: String,
}

impl Insight {
    pub fn new(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            message: message.into(),
        }
    }
}

/// Result of one pipeline run.
///
/// Serializes with the fixed sections `file`, `generated`, `overview`,
/// `numeric`, `categorical`, `datetime`, `correlations`, `missing`,
/// `text_stats` and `insights`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRecord {
    pub file: DocumentSummary,
    /// Local time the record was generated, `YYYY-MM-DD HH:MM:SS`.
    pub generated: String,
    pub overview: Option<Overview>,
    pub profiles: Vec<ColumnProfile>,
    pub correlations: Option<CorrelationMatrix>,
    pub missing: Vec<MissingColumn>,
    pub text_stats: Option<TextStats>,
    pub insights: Vec<Insight>,
}

impl AnalysisRecord {
    pub fn numeric(&self) -> impl Iterator<Item = &NumericProfile> {
        self.profiles.iter().filter_map(|p| match p {
            ColumnProfile::Numeric(n) => Some(n),
            _ => None,
        })
    }

    pub fn categorical(&self) -> impl Iterator<Item = &CategoricalProfile> {
        self.profiles.iter().filter_map(|p| match p {
            ColumnProfile::Categorical(c) => Some(c),
            _ => None,
        })
    }

    pub fn datetime(&self) -> impl Iterator<Item = &DatetimeProfile> {
        self.profiles.iter().filter_map(|p| match p {
            ColumnProfile::Datetime(d) => Some(d),
            _ => None,
        })
    }

    pub fn row_count(&self) -> usize {
        self.overview.as_ref().map_or(0, |o| o.rows)
    }
}

#[derive(Serialize)]
struct RecordView<'a> {
    file: &'a DocumentSummary,
    generated: &'a str,
    overview: &'a Option<Overview>,
    #[serde(serialize_with = "serialize_keyed")]
    numeric: Vec<&'a NumericProfile>,
    #[serde(serialize_with = "serialize_keyed")]
    categorical: Vec<&'a CategoricalProfile>,
    #[serde(serialize_with = "serialize_keyed")]
    datetime: Vec<&'a DatetimeProfile>,
    correlations: &'a Option<CorrelationMatrix>,
    #[serde(serialize_with = "serialize_keyed")]
    missing: &'a [MissingColumn],
    text_stats: &'a Option<TextStats>,
    insights: &'a [Insight],
}

impl Serialize for AnalysisRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RecordView {
            file: &self.file,
            generated: &self.generated,
            overview: &self.overview,
            numeric: self.numeric().collect(),
            categorical: self.categorical().collect(),
            datetime: self.datetime().collect(),
            correlations: &self.correlations,
            missing: &self.missing,
            text_stats: &self.text_stats,
            insights: &self.insights,
        }
        .serialize(serializer)
    }
}
