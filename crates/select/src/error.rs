//! Error types for the telesim-select crate.

/// Invalid temporal selection parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// Returned when a month index is outside 0..=11.
    #[error("invalid month: {month} (must be 0..=11)")]
    InvalidMonth {
        /// The invalid month value.
        month: usize,
    },

    /// Returned when a calendar selection needs whole years but the time axis has a remainder.
    #[error("time length {n_times} is not a whole number of years (multiple of 12)")]
    IncompleteYears {
        /// Length of the time axis.
        n_times: usize,
    },

    /// Returned when a shift would leave no overlapping time steps.
    #[error("shift {shift} too large for series of length {len}")]
    ShiftTooLarge {
        /// Requested shift.
        shift: isize,
        /// Length of the series being shifted.
        len: usize,
    },

    /// Returned when the reference series is not aligned with the field's time axis.
    #[error("reference length {reference_len} != field time length {field_len}")]
    LengthMismatch {
        /// Field time axis length.
        field_len: usize,
        /// Reference series length.
        reference_len: usize,
    },
}
