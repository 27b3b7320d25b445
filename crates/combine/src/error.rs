//! Error types for the telesim-combine crate.

/// Error type for all fallible operations in the telesim-combine crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CombineError {
    /// Returned when the two maps differ in shape.
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Shape of the first map.
        expected: (usize, usize),
        /// Shape of the second map.
        got: (usize, usize),
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = CombineError::ShapeMismatch {
            expected: (2, 3),
            got: (3, 2),
        };
        assert_eq!(e.to_string(), "shape mismatch: expected (2, 3), got (3, 2)");
    }

    #[test]
    fn is_send_sync_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<CombineError>();
    }
}
