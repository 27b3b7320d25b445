//! # telesim-select
//!
//! Temporal subsets of a monthly field and its reference series.
//!
//! ## Architecture
//!
//! ```text
//! Selection ──select()──▶ Subset { field: [t', level, lat, lon], reference: [t'] }
//!   WholePeriod   t' = t                       (borrowed)
//!   PerMonth(m)   t' = {12y + m}               (copied)
//!   WinterOnly    t' = {12y, 12y + 1, 12y + 11} (copied)
//!   Shift(k)      t' = t - |k|                 (borrowed)
//! ```
//!
//! Months are 0-based (`0` = January) and the time axis is assumed to start
//! in January of the first year.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `indices` | Index generators for month, winter and shift selections |
//! | `selection` | [`Selection`] and the aligned [`Subset`] it produces |
//! | `error` | Error types |

mod error;
mod indices;
mod selection;

pub use error::SelectError;
pub use indices::{MONTH_NAMES, MONTHS_PER_YEAR, month_indices, shift_ranges, winter_indices};
pub use selection::{Selection, Subset, select};
