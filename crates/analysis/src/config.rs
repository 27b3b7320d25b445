//! Configuration shared by the analysis pipelines.

use telesim_agreement::{DEFAULT_THRESHOLD, validate_threshold};
use telesim_scaling::{DEFAULT_BINS, QuantileBinning};

use crate::error::AnalysisError;

/// Settings that every pipeline reads.
///
/// # Example
///
/// ```
/// use telesim_analysis::AnalysisConfig;
///
/// let config = AnalysisConfig::new()
///     .with_level(2)
///     .with_threshold(0.25)
///     .with_n_bins(5);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Vertical level the similarities are computed on.
    level: usize,
    /// Agreement classification threshold, in `[0, 0.5)`.
    threshold: f64,
    /// Bucket count of the default quantile binning.
    n_bins: usize,
    /// Rescale maps of already-normalised measures before threshold comparison.
    rescale_normalized: bool,
}

impl AnalysisConfig {
    /// Defaults: `level = 0`, `threshold = 0.35`, `n_bins = 10`,
    /// `rescale_normalized = false`.
    pub fn new() -> Self {
        Self {
            level: 0,
            threshold: DEFAULT_THRESHOLD,
            n_bins: DEFAULT_BINS,
            rescale_normalized: false,
        }
    }

    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_n_bins(mut self, n_bins: usize) -> Self {
        self.n_bins = n_bins;
        self
    }

    pub fn with_rescale_normalized(mut self, rescale_normalized: bool) -> Self {
        self.rescale_normalized = rescale_normalized;
        self
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    pub fn rescale_normalized(&self) -> bool {
        self.rescale_normalized
    }

    /// The quantile binning scaler for [`n_bins`](Self::n_bins).
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidConfig`] if `n_bins < 2`.
    pub fn quantile_binning(&self) -> Result<QuantileBinning, AnalysisError> {
        QuantileBinning::new(self.n_bins).map_err(|e| AnalysisError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the threshold is non-finite or outside `[0, 0.5)`,
    /// or if `n_bins < 2`.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        validate_threshold(self.threshold).map_err(|e| AnalysisError::InvalidConfig {
            reason: e.to_string(),
        })?;
        self.quantile_binning()?;
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new()
    }
}
