//! Pearson correlation measures.

use crate::measure::SimilarityMeasure;

/// Pearson's product-moment correlation over the finite pairs.
///
/// NaN when fewer than three finite pairs remain or either series is constant.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pearson;

impl SimilarityMeasure for Pearson {
    fn name(&self) -> &str {
        "pearson"
    }

    fn evaluate(&self, series: &[f64], reference: &[f64]) -> f64 {
        telesim_stats::pearson_correlation(series, reference).unwrap_or(f64::NAN)
    }

    fn already_normalized(&self) -> bool {
        true
    }

    fn min_len(&self) -> usize {
        3
    }
}

/// Absolute value of [`Pearson`]: strength of the linear dependency, sign dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsPearson;

impl SimilarityMeasure for AbsPearson {
    fn name(&self) -> &str {
        "pearson_abs"
    }

    fn evaluate(&self, series: &[f64], reference: &[f64]) -> f64 {
        Pearson.evaluate(series, reference).abs()
    }

    fn already_normalized(&self) -> bool {
        true
    }

    fn min_len(&self) -> usize {
        3
    }
}
