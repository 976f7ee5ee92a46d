//! Profiling limits and heuristics.

/// Column-name fragments that mark a column as a datetime candidate.
pub const DATETIME_KEYWORDS: [&str; 7] =
    ["date", "time", "dt", "year", "month", "created", "updated"];

/// Decimal places for correlation coefficients in the matrix and pair list.
pub const CORRELATION_DECIMALS: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileOptions {
    /// Text and boolean columns profiled as categories, in column order.
    pub max_categorical_columns: usize,
    /// Value counts kept per categorical column.
    pub top_values: usize,
    /// Correlation pairs kept, strongest first.
    pub top_pairs: usize,
    /// Ranked words kept by the text profiler.
    pub top_words: usize,
    /// Lowercase name fragments that make a column a datetime candidate.
    pub datetime_keywords: Vec<String>,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            max_categorical_columns: 20,
            top_values: 10,
            top_pairs: 10,
            top_words: 20,
            datetime_keywords: DATETIME_KEYWORDS.iter().map(|k| (*k).to_string()).collect(),
        }
    }
}

impl ProfileOptions {
    pub fn with_max_categorical_columns(mut self, max: usize) -> Self {
        self.max_categorical_columns = max;
        self
    }

    pub fn with_top_values(mut self, top: usize) -> Self {
        self.top_values = top;
        self
    }

    pub fn with_top_pairs(mut self, top: usize) -> Self {
        self.top_pairs = top;
        self
    }

    pub fn with_top_words(mut self, top: usize) -> Self {
        self.top_words = top;
        self
    }

    /// Replace the datetime keywords; they are matched against lowercased
    /// column names.
    pub fn with_datetime_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.datetime_keywords = keywords
            .into_iter()
            .map(|k| k.into().to_lowercase())
            .collect();
        self
    }

    /// Whether `name` contains one of the datetime keywords.
    pub fn is_datetime_candidate(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.datetime_keywords
            .iter()
            .any(|k| lower.contains(k.as_str()))
    }
}
