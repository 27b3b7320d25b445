//! Errors raised while loading a telesim configuration.

use std::path::PathBuf;

use telesim_analysis::AnalysisError;
use telesim_similarity::SimilarityError;

/// Error type for the TOML configuration layer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Returned when the configuration file cannot be read.
    #[error("failed to read config {}: {reason}", path.display())]
    Io {
        /// The path that was read.
        path: PathBuf,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the TOML text does not match the schema.
    #[error("failed to parse TOML config: {reason}")]
    Parse {
        /// Parser message, including the location.
        reason: String,
    },

    /// Returned when the analysis settings are out of range.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// Returned when a measure name is not known.
    #[error(transparent)]
    Measure(#[from] SimilarityError),

    /// Returned when `mutual_information_bins` is outside `2..=max`.
    #[error("invalid mutual information bin count: {bins} (must be 2..={max})")]
    MeasureBins {
        /// The configured bin count.
        bins: usize,
        /// Largest accepted bin count.
        max: usize,
    },

    /// Returned when the agreement statistic name is not known.
    #[error("unknown agreement statistic '{name}' (known: std, entropy)")]
    UnknownStatistic {
        /// The name that was looked up.
        name: String,
    },
}
