//! Accumulated validation utilities.
//!
//! [`ValidationCollector`] gathers every violated invariant of an input so a
//! caller sees all of them at once in a single [`FieldError::Validation`].

use crate::error::FieldError;

/// Accumulates validation errors and converts them into a single
/// [`FieldError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), FieldError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(FieldError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

/// Check that no axis of `shape` has length zero.
///
/// `names` labels the axes in the same order as `shape`.
pub(crate) fn validate_non_empty_axes(shape: &[usize], names: &[&str]) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    for (&len, name) in shape.iter().zip(names) {
        if len == 0 {
            c.push(format!("{name} axis is empty"));
        }
    }
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_empty_is_ok() {
        let c = ValidationCollector::new();
        assert_eq!(c.len(), 0);
        assert!(c.finish().is_ok());
    }

    #[test]
    fn collector_joins_messages() {
        let mut c = ValidationCollector::new();
        c.push("one");
        c.push("two");
        match c.finish().unwrap_err() {
            FieldError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert_eq!(details, "one; two");
            }
            other => panic!("expected FieldError::Validation, got {other:?}"),
        }
    }

    #[test]
    fn non_empty_axes_reports_each_empty_axis() {
        let c = validate_non_empty_axes(&[0, 1, 0], &["time", "level", "lat"]);
        assert_eq!(c.len(), 2);
        let err = c.finish().unwrap_err();
        assert!(err.to_string().contains("time axis is empty"));
        assert!(err.to_string().contains("lat axis is empty"));
    }

    #[test]
    fn non_empty_axes_ok() {
        assert!(validate_non_empty_axes(&[3, 4], &["lat", "lon"]).finish().is_ok());
    }
}
