//! Error types for the telesim-field crate.

/// Error type for all fallible operations in the telesim-field crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when a flat buffer cannot be reshaped into the requested shape.
    #[error("invalid shape: {reason}")]
    InvalidShape {
        /// Description of the reshape failure.
        reason: String,
    },

    /// Returned when a vertical level index is past the last level.
    #[error("level {level} out of range (field has {n_levels} levels)")]
    LevelOutOfRange {
        /// The requested level.
        level: usize,
        /// Number of levels in the field.
        n_levels: usize,
    },
}

impl From<ndarray::ShapeError> for FieldError {
    fn from(e: ndarray::ShapeError) -> Self {
        FieldError::InvalidShape {
            reason: e.to_string(),
        }
    }
}
