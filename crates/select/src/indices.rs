//! Time-index generators for calendar and shifted selections.

use std::ops::Range;

use crate::error::SelectError;

/// Months in a calendar year.
pub const MONTHS_PER_YEAR: usize = 12;

/// English month names, index 0 = January.
pub const MONTH_NAMES: [&str; MONTHS_PER_YEAR] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn whole_years(n_times: usize) -> Result<usize, SelectError> {
    if n_times == 0 || n_times % MONTHS_PER_YEAR != 0 {
        return Err(SelectError::IncompleteYears { n_times });
    }
    Ok(n_times / MONTHS_PER_YEAR)
}

/// Time indices of one calendar month across all years: `{12y + month}`.
///
/// # Errors
///
/// Returns [`SelectError::InvalidMonth`] if `month > 11` and
/// [`SelectError::IncompleteYears`] if `n_times` is not a positive multiple of 12.
///
/// # Example
///
/// ```
/// use telesim_select::month_indices;
///
/// assert_eq!(month_indices(60, 0).unwrap(), vec![0, 12, 24, 36, 48]);
/// ```
pub fn month_indices(n_times: usize, month: usize) -> Result<Vec<usize>, SelectError> {
    if month >= MONTHS_PER_YEAR {
        return Err(SelectError::InvalidMonth { month });
    }
    let n_years = whole_years(n_times)?;
    Ok((0..n_years).map(|y| y * MONTHS_PER_YEAR + month).collect())
}

/// Winter time indices: January, February and December of every year.
///
/// Generated per year in the order `12y, 12y + 1, 12y + 11`, which for a
/// sorted time axis is also ascending.
///
/// # Errors
///
/// Returns [`SelectError::IncompleteYears`] if `n_times` is not a positive
/// multiple of 12.
pub fn winter_indices(n_times: usize) -> Result<Vec<usize>, SelectError> {
    let n_years = whole_years(n_times)?;
    let mut indices = Vec::with_capacity(3 * n_years);
    for y in 0..n_years {
        let year = y * MONTHS_PER_YEAR;
        indices.push(year); // January
        indices.push(year + 1); // February
        indices.push(year + 11); // December
    }
    Ok(indices)
}

/// Overlapping ranges for a truncating shift of `shift` steps.
///
/// Returns `(field_range, reference_range)`, both of length `len - |shift|`.
/// A positive shift pairs reference step `t` with field step `t + shift`
/// (the field lags the reference); a negative shift pairs reference step
/// `t + |shift|` with field step `t`.
///
/// # Errors
///
/// Returns [`SelectError::ShiftTooLarge`] if `|shift| >= len`.
pub fn shift_ranges(
    len: usize,
    shift: isize,
) -> Result<(Range<usize>, Range<usize>), SelectError> {
    let k = shift.unsigned_abs();
    if k >= len {
        return Err(SelectError::ShiftTooLarge { shift, len });
    }
    if shift >= 0 {
        Ok((k..len, 0..len - k))
    } else {
        Ok((0..len - k, k..len))
    }
}
