//! Quantile binning.

use telesim_field::SimilarityMap;
use telesim_stats::{quantile_type7, sorted_finite};
use tracing::debug;

use crate::error::ScalingError;
use crate::scaler::ScalingFunction;

/// Decile binning.
pub const DEFAULT_BINS: usize = 10;

/// Replaces every value by the lower edge of its quantile bucket.
///
/// Bucket edges are the type-7 quantiles of the map's finite values at
/// `p = 1/n, 2/n, .., (n-1)/n`. A value `v` lands in bucket
/// `b = #{edges e : v > e}` and becomes `b / n`, so with the default ten
/// bins the output is one of `0.0, 0.1, .., 0.9` and `>= 0.8` selects the
/// top fifth of the map.
///
/// Ordering is preserved and equal values share a bucket. NaN cells stay
/// NaN and do not contribute to the edges. A map without finite values is
/// returned unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantileBinning {
    n_bins: usize,
}

impl QuantileBinning {
    /// # Errors
    ///
    /// Returns [`ScalingError::InvalidBinCount`] if `n_bins < 2`.
    pub fn new(n_bins: usize) -> Result<Self, ScalingError> {
        if n_bins < 2 {
            return Err(ScalingError::InvalidBinCount { n_bins });
        }
        Ok(Self { n_bins })
    }

    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    /// Interior bucket edges of `map`, ascending. Empty when the map has no
    /// finite value.
    pub fn edges(&self, map: &SimilarityMap) -> Vec<f64> {
        let sorted = sorted_finite(map.iter());
        if sorted.is_empty() {
            return Vec::new();
        }
        (1..self.n_bins)
            .map(|i| quantile_type7(&sorted, i as f64 / self.n_bins as f64))
            .collect()
    }
}

impl Default for QuantileBinning {
    fn default() -> Self {
        Self {
            n_bins: DEFAULT_BINS,
        }
    }
}

impl ScalingFunction for QuantileBinning {
    fn name(&self) -> &str {
        "quantile_binning"
    }

    fn scale(&self, map: &SimilarityMap) -> SimilarityMap {
        let edges = self.edges(map);
        if edges.is_empty() {
            debug!("no finite values to bin");
            return map.clone();
        }
        let n = self.n_bins as f64;
        map.map(|v| {
            if v.is_nan() {
                v
            } else {
                edges.partition_point(|&e| v > e) as f64 / n
            }
        })
    }
}
