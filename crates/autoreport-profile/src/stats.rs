//! Descriptive statistics over finite `f64` samples, backed by polars.
//!
//! Higher moments use the bias-adjusted sample estimators and collapse to
//! `0.0` when undefined: fewer than three (skewness) or four (kurtosis)
//! values, or a constant sample.

use polars::prelude::cov::pearson_corr;
use polars::prelude::{
    ChunkAgg, ChunkQuantile, ChunkVar, Float64Chunked, IntoSeries, MomentSeries,
    NewChunkedArray, QuantileMethod,
};

fn chunked(name: &str, values: &[f64]) -> Float64Chunked {
    Float64Chunked::from_slice(name.into(), values)
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// A numeric sample prepared once and queried per statistic.
#[derive(Debug, Clone)]
pub struct Sample {
    values: Float64Chunked,
}

impl Sample {
    pub fn new(values: &[f64]) -> Self {
        Self {
            values: chunked("sample", values),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mean(&self) -> Option<f64> {
        finite(self.values.mean())
    }

    pub fn min(&self) -> Option<f64> {
        self.values.min()
    }

    pub fn max(&self) -> Option<f64> {
        self.values.max()
    }

    fn is_constant(&self) -> bool {
        self.min() == self.max()
    }

    /// Sample standard deviation (n − 1 denominator); `0.0` below two values.
    pub fn std(&self) -> f64 {
        if self.len() < 2 {
            return 0.0;
        }
        finite(self.values.std(1)).unwrap_or(0.0)
    }

    /// Linear-interpolation quantile.
    ///
    /// # Examples
    ///
    /// ```
    /// use autoreport_profile::stats::Sample;
    ///
    /// let sample = Sample::new(&[1.0, 2.0, 3.0, 4.0, 100.0]);
    /// assert_eq!(sample.quantile(0.25), Some(2.0));
    /// assert_eq!(sample.quantile(0.5), Some(3.0));
    /// ```
    pub fn quantile(&self, q: f64) -> Option<f64> {
        self.values
            .quantile(q.clamp(0.0, 1.0), QuantileMethod::Linear)
            .ok()
            .flatten()
    }

    /// Adjusted Fisher-Pearson skewness.
    pub fn skewness(&self) -> f64 {
        if self.len() < 3 || self.is_constant() {
            return 0.0;
        }
        let skew = self.values.clone().into_series().skew(false);
        finite(skew.ok().flatten()).unwrap_or(0.0)
    }

    /// Bias-corrected excess kurtosis.
    pub fn kurtosis(&self) -> f64 {
        if self.len() < 4 || self.is_constant() {
            return 0.0;
        }
        let kurt = self.values.clone().into_series().kurtosis(true, false);
        finite(kurt.ok().flatten()).unwrap_or(0.0)
    }
}

/// Pearson correlation of paired samples, or `None` when fewer than two
/// pairs exist or either side is constant.
pub fn pearson(pairs: &[(f64, f64)]) -> Option<f64> {
    if pairs.len() < 2 {
        return None;
    }
    let (xs, ys): (Vec<f64>, Vec<f64>) = pairs.iter().copied().unzip();
    let (x, y) = (chunked("x", &xs), chunked("y", &ys));
    if x.min() == x.max() || y.min() == y.max() {
        return None;
    }
    finite(pearson_corr(&x, &y)).map(|r| r.clamp(-1.0, 1.0))
}
