//! Error types for the telesim-scaling crate.

/// Error type for all fallible operations in the telesim-scaling crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScalingError {
    /// Returned when a binning scaler is asked for fewer than two bins.
    #[error("invalid bin count: {n_bins} (must be >= 2)")]
    InvalidBinCount {
        /// The rejected bin count.
        n_bins: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = ScalingError::InvalidBinCount { n_bins: 1 };
        assert_eq!(e.to_string(), "invalid bin count: 1 (must be >= 2)");
    }

    #[test]
    fn is_send_sync_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<ScalingError>();
    }
}
