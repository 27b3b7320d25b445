//! # telesim-field
//!
//! In-memory containers shared by every telesim stage:
//!
//! | Type | Shape | Role |
//! |------|-------|------|
//! | [`Field`] | `[time, level, lat, lon]` | gridded input, read-only |
//! | [`ReferenceSeries`] | `[time]` | baseline series |
//! | [`SimilarityMap`] | `[lat, lon]` | one map per (measure, level, subset) |
//!
//! Dataset loading is not part of this crate; callers build a [`Field`]
//! from an `ndarray::Array4` they already hold.

mod error;
mod field;
mod map;
mod reference;
mod validate;

pub use error::FieldError;
pub use field::{Field, axis, level_slab};
pub use map::SimilarityMap;
pub use reference::ReferenceSeries;
