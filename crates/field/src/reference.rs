//! Reference time series container.

use ndarray::{Array1, ArrayView1};

use crate::error::FieldError;
use crate::validate;

/// One-dimensional reference series aligned index-for-index with a field's
/// time axis (for example a QBO index).
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSeries {
    values: Array1<f64>,
}

impl ReferenceSeries {
    /// Creates a reference series.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Validation`] if `values` is empty.
    pub fn new(values: impl Into<Array1<f64>>) -> Result<Self, FieldError> {
        let values = values.into();
        validate::validate_non_empty_axes(&[values.len()], &["time"]).finish()?;
        Ok(Self { values })
    }

    /// Number of time steps.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; construction rejects empty series.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrowed view of the values.
    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }

    /// Values as a contiguous slice.
    pub fn as_slice(&self) -> &[f64] {
        // Owned `Array1` built by `new` is always standard layout.
        self.values
            .as_slice()
            .unwrap_or_default()
    }

    /// Consumes the series and returns the underlying array.
    pub fn into_inner(self) -> Array1<f64> {
        self.values
    }
}

impl TryFrom<Vec<f64>> for ReferenceSeries {
    type Error = FieldError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_accessors() {
        let r = ReferenceSeries::new(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(r.len(), 3);
        assert!(!r.is_empty());
        assert_eq!(r.as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(r.view()[1], 2.0);
    }

    #[test]
    fn empty_rejected() {
        let err = ReferenceSeries::new(Vec::<f64>::new()).unwrap_err();
        assert!(err.to_string().contains("time axis is empty"));
    }

    #[test]
    fn try_from_vec() {
        let r = ReferenceSeries::try_from(vec![0.5; 12]).unwrap();
        assert_eq!(r.len(), 12);
    }
}
