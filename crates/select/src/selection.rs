//! Temporal selection of an aligned field / reference pair.

use std::fmt;

use ndarray::{ArrayView1, ArrayView4, Axis, CowArray, Ix1, Ix4, s};
use telesim_field::{Field, ReferenceSeries};
use tracing::debug;

use crate::error::SelectError;
use crate::indices::{MONTH_NAMES, month_indices, shift_ranges, winter_indices};

/// Which time steps of the field and reference enter a similarity computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// All time steps.
    #[default]
    WholePeriod,
    /// One calendar month (0 = January) of every year.
    PerMonth(usize),
    /// January, February and December of every year.
    WinterOnly,
    /// Truncating shift of the reference relative to the field; see
    /// [`shift_ranges`](crate::shift_ranges) for the sign convention.
    Shift(isize),
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::WholePeriod => write!(f, "whole period"),
            Selection::PerMonth(m) => match MONTH_NAMES.get(*m) {
                Some(name) => write!(f, "{name}"),
                None => write!(f, "month {m}"),
            },
            Selection::WinterOnly => write!(f, "winter months"),
            Selection::Shift(k) => write!(f, "Shifted by {k}"),
        }
    }
}

/// Field and reference restricted to the same time steps.
///
/// Whole-period and shifted selections borrow the inputs; calendar
/// selections gather the chosen time steps into owned arrays.
#[derive(Debug, Clone)]
pub struct Subset<'a> {
    field: CowArray<'a, f64, Ix4>,
    reference: CowArray<'a, f64, Ix1>,
}

impl Subset<'_> {
    /// `[time, level, lat, lon]` view of the selected field steps.
    pub fn field(&self) -> ArrayView4<'_, f64> {
        self.field.view()
    }

    /// View of the selected reference steps.
    pub fn reference(&self) -> ArrayView1<'_, f64> {
        self.reference.view()
    }

    /// Number of selected time steps.
    pub fn n_times(&self) -> usize {
        self.reference.len()
    }

    /// `true` when the subset borrows the inputs instead of copying them.
    pub fn is_borrowed(&self) -> bool {
        self.field.is_view() && self.reference.is_view()
    }
}

/// Restricts `field` and `reference` to the time steps named by `selection`.
///
/// # Errors
///
/// Returns [`SelectError::LengthMismatch`] if the reference is not as long as
/// the field's time axis, and the index-generator errors of
/// [`month_indices`], [`winter_indices`] and [`shift_ranges`].
///
/// # Example
///
/// ```
/// use ndarray::Array4;
/// use telesim_field::{Field, ReferenceSeries};
/// use telesim_select::{Selection, select};
///
/// let field = Field::new(Array4::zeros((24, 1, 2, 2))).unwrap();
/// let reference = ReferenceSeries::new(vec![0.0; 24]).unwrap();
///
/// let winter = select(&field, &reference, Selection::WinterOnly).unwrap();
/// assert_eq!(winter.n_times(), 6);
/// ```
pub fn select<'a>(
    field: &'a Field,
    reference: &'a ReferenceSeries,
    selection: Selection,
) -> Result<Subset<'a>, SelectError> {
    let n_times = field.n_times();
    if reference.len() != n_times {
        return Err(SelectError::LengthMismatch {
            field_len: n_times,
            reference_len: reference.len(),
        });
    }

    let subset = match selection {
        Selection::WholePeriod => Subset {
            field: CowArray::from(field.view()),
            reference: CowArray::from(reference.view()),
        },
        Selection::PerMonth(month) => gather(field, reference, &month_indices(n_times, month)?),
        Selection::WinterOnly => gather(field, reference, &winter_indices(n_times)?),
        Selection::Shift(shift) => {
            let (field_range, reference_range) = shift_ranges(n_times, shift)?;
            Subset {
                field: CowArray::from(field.view().slice_move(s![field_range, .., .., ..])),
                reference: CowArray::from(reference.view().slice_move(s![reference_range])),
            }
        }
    };

    debug!(%selection, n_times = subset.n_times(), "selected time steps");
    Ok(subset)
}

fn gather<'a>(field: &'a Field, reference: &'a ReferenceSeries, indices: &[usize]) -> Subset<'a> {
    Subset {
        field: CowArray::from(field.view().select(Axis(0), indices)),
        reference: CowArray::from(reference.view().select(Axis(0), indices)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array4;

    /// Field whose value at every cell equals the time index.
    fn time_ramp(n_times: usize) -> (Field, ReferenceSeries) {
        let data = Array4::from_shape_fn((n_times, 1, 2, 2), |(t, _, _, _)| t as f64);
        let reference: Vec<f64> = (0..n_times).map(|t| t as f64).collect();
        (
            Field::new(data).unwrap(),
            ReferenceSeries::new(reference).unwrap(),
        )
    }

    #[test]
    fn whole_period_borrows() {
        let (field, reference) = time_ramp(24);
        let subset = select(&field, &reference, Selection::WholePeriod).unwrap();
        assert!(subset.is_borrowed());
        assert_eq!(subset.n_times(), 24);
        assert_eq!(subset.field(), field.view());
    }

    #[test]
    fn per_month_copies_selected_steps() {
        let (field, reference) = time_ramp(36);
        let subset = select(&field, &reference, Selection::PerMonth(5)).unwrap();
        assert!(!subset.is_borrowed());
        let times: Vec<f64> = subset.reference().to_vec();
        assert_eq!(times, vec![5.0, 17.0, 29.0]);
        assert_eq!(subset.field()[[2, 0, 1, 1]], 29.0);
    }

    #[test]
    fn shift_is_borrowed_and_aligned() {
        let (field, reference) = time_ramp(12);
        let subset = select(&field, &reference, Selection::Shift(2)).unwrap();
        assert!(subset.is_borrowed());
        assert_eq!(subset.n_times(), 10);
        assert_eq!(subset.reference()[0], 0.0);
        assert_eq!(subset.field()[[0, 0, 0, 0]], 2.0);
    }

    #[test]
    fn length_mismatch() {
        let (field, _) = time_ramp(12);
        let reference = ReferenceSeries::new(vec![0.0; 11]).unwrap();
        assert_eq!(
            select(&field, &reference, Selection::WholePeriod).unwrap_err(),
            SelectError::LengthMismatch {
                field_len: 12,
                reference_len: 11
            }
        );
    }

    #[test]
    fn display_labels() {
        assert_eq!(Selection::WholePeriod.to_string(), "whole period");
        assert_eq!(Selection::PerMonth(1).to_string(), "February");
        assert_eq!(Selection::PerMonth(14).to_string(), "month 14");
        assert_eq!(Selection::Shift(-3).to_string(), "Shifted by -3");
    }
}
