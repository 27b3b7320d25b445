//! Error types for the telesim-agreement crate.

/// Error type for all fallible operations in the telesim-agreement crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AgreementError {
    /// Returned when no maps are supplied.
    #[error("at least one map is required")]
    Empty,

    /// Returned when a map's shape differs from the first map's.
    #[error("shape mismatch at map {index}: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Position of the offending map.
        index: usize,
        /// Shape of the first map.
        expected: (usize, usize),
        /// Shape of the offending map.
        got: (usize, usize),
    },

    /// Returned when the classification threshold is outside `[0, 0.5)`.
    #[error("invalid threshold: {threshold} (must be finite and in [0, 0.5))")]
    InvalidThreshold {
        /// The rejected threshold.
        threshold: f64,
    },
}
