//! Error types for the telesim-analysis crate.

use telesim_agreement::AgreementError;
use telesim_combine::CombineError;
use telesim_field::FieldError;
use telesim_select::SelectError;
use telesim_similarity::SimilarityError;

/// Coarse classification of an [`AnalysisError`].
///
/// Callers that skip failing panels and continue usually branch on this
/// rather than on the nested stage error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested time subset cannot be formed from the inputs.
    InvalidSelection,
    /// A vertical level index is past the last level.
    IndexOutOfRange,
    /// Two arrays that must share a shape do not.
    ShapeMismatch,
    /// A measure cannot be applied or broke its output contract.
    UnsupportedMeasure,
    /// A configuration value or pipeline argument is invalid.
    InvalidConfig,
    /// A panel grid could not be serialised.
    Serialization,
}

/// Error type for all fallible operations in the telesim-analysis crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("selection failed: {0}")]
    Select(#[from] SelectError),

    #[error("similarity failed: {0}")]
    Similarity(#[from] SimilarityError),

    #[error("combination failed: {0}")]
    Combine(#[from] CombineError),

    #[error("agreement failed: {0}")]
    Agreement(#[from] AgreementError),

    /// Returned when a configuration value is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a pipeline receives an empty list it needs to iterate.
    #[error("no {what} given")]
    EmptyInput {
        /// What was empty, e.g. "measures".
        what: &'static str,
    },

    /// Returned when a map handed to an agreement statistic holds values
    /// outside the statistic's domain.
    #[error(
        "statistic '{statistic}' needs non-negative values but '{measure}' has {cells} negative cell(s)"
    )]
    StatisticDomain {
        /// Name of the agreement statistic.
        statistic: String,
        /// Label of the measure whose map broke the domain.
        measure: String,
        /// Number of negative cells in that map.
        cells: usize,
    },

    /// Returned when JSON serialisation fails.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the problem.
        reason: String,
    },
}

impl AnalysisError {
    /// The taxonomy class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::Select(_) => ErrorKind::InvalidSelection,
            AnalysisError::Similarity(e) => match e {
                SimilarityError::Field(f) => field_kind(f),
                SimilarityError::LengthMismatch { .. } => ErrorKind::InvalidSelection,
                SimilarityError::UnsupportedMeasure { .. }
                | SimilarityError::UnknownMeasure { .. } => ErrorKind::UnsupportedMeasure,
            },
            AnalysisError::Combine(CombineError::ShapeMismatch { .. }) => ErrorKind::ShapeMismatch,
            AnalysisError::Agreement(e) => match e {
                AgreementError::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
                AgreementError::Empty | AgreementError::InvalidThreshold { .. } => {
                    ErrorKind::InvalidConfig
                }
            },
            AnalysisError::StatisticDomain { .. } => ErrorKind::UnsupportedMeasure,
            AnalysisError::InvalidConfig { .. } | AnalysisError::EmptyInput { .. } => {
                ErrorKind::InvalidConfig
            }
            AnalysisError::Serialization { .. } => ErrorKind::Serialization,
        }
    }
}

fn field_kind(error: &FieldError) -> ErrorKind {
    match error {
        FieldError::LevelOutOfRange { .. } => ErrorKind::IndexOutOfRange,
        FieldError::InvalidShape { .. } | FieldError::Validation { .. } => {
            ErrorKind::InvalidConfig
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_the_failing_stage() {
        let cases = [
            (
                AnalysisError::from(SelectError::InvalidMonth { month: 12 }),
                ErrorKind::InvalidSelection,
            ),
            (
                AnalysisError::from(SimilarityError::Field(FieldError::LevelOutOfRange {
                    level: 3,
                    n_levels: 1,
                })),
                ErrorKind::IndexOutOfRange,
            ),
            (
                AnalysisError::from(SimilarityError::Field(FieldError::Validation {
                    count: 1,
                    details: "time axis is empty".to_string(),
                })),
                ErrorKind::InvalidConfig,
            ),
            (
                AnalysisError::from(SimilarityError::Field(FieldError::InvalidShape {
                    reason: "length 7 does not match 8".to_string(),
                })),
                ErrorKind::InvalidConfig,
            ),
            (
                AnalysisError::from(SimilarityError::LengthMismatch {
                    field_len: 12,
                    reference_len: 11,
                }),
                ErrorKind::InvalidSelection,
            ),
            (
                AnalysisError::from(SimilarityError::UnsupportedMeasure {
                    measure: "x".to_string(),
                    reason: "y".to_string(),
                }),
                ErrorKind::UnsupportedMeasure,
            ),
            (
                AnalysisError::from(CombineError::ShapeMismatch {
                    expected: (1, 2),
                    got: (2, 1),
                }),
                ErrorKind::ShapeMismatch,
            ),
            (
                AnalysisError::from(AgreementError::InvalidThreshold { threshold: 0.7 }),
                ErrorKind::InvalidConfig,
            ),
            (
                AnalysisError::StatisticDomain {
                    statistic: "entropy".to_string(),
                    measure: "pearson".to_string(),
                    cells: 4,
                },
                ErrorKind::UnsupportedMeasure,
            ),
            (
                AnalysisError::EmptyInput { what: "measures" },
                ErrorKind::InvalidConfig,
            ),
        ];
        for (error, kind) in cases {
            assert_eq!(error.kind(), kind, "{error}");
        }
    }

    #[test]
    fn display_wraps_stage_message() {
        let e = AnalysisError::from(SelectError::InvalidMonth { month: 12 });
        assert_eq!(
            e.to_string(),
            "selection failed: invalid month: 12 (must be 0..=11)"
        );
        assert_eq!(
            AnalysisError::EmptyInput { what: "shifts" }.to_string(),
            "no shifts given"
        );
        let e = AnalysisError::StatisticDomain {
            statistic: "entropy".to_string(),
            measure: "pearson".to_string(),
            cells: 4,
        };
        assert_eq!(
            e.to_string(),
            "statistic 'entropy' needs non-negative values but 'pearson' has 4 negative cell(s)"
        );
    }

    #[test]
    fn is_send_sync_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<AnalysisError>();
    }
}
