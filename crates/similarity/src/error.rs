//! Error types for the telesim-similarity crate.

use telesim_field::FieldError;

/// Error type for all fallible operations in the telesim-similarity crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimilarityError {
    /// Wraps a field error, such as a level index past the last level.
    #[error("field error: {0}")]
    Field(#[from] FieldError),

    /// Returned when the reference series does not match the field's time axis.
    #[error("reference length {reference_len} != field time length {field_len}")]
    LengthMismatch {
        /// Field time axis length.
        field_len: usize,
        /// Reference series length.
        reference_len: usize,
    },

    /// Returned when a measure cannot be applied or breaks its output contract.
    #[error("unsupported measure '{measure}': {reason}")]
    UnsupportedMeasure {
        /// Name of the measure.
        measure: String,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a measure name is not in the registry.
    #[error("unknown measure '{name}' (known: {known})")]
    UnknownMeasure {
        /// The name that was looked up.
        name: String,
        /// Comma-separated registry names.
        known: String,
    },
}
