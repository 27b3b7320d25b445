//! Similarity between a reference series and every grid cell of a field.
//!
//! A [`SimilarityMeasure`] scores two equally long series. [`compute`]
//! evaluates it for every `(lat, lon)` cell on one vertical level and
//! returns a [`SimilarityMap`](telesim_field::SimilarityMap).
//!
//! # Measures
//!
//! | Measure | Range | `already_normalized` |
//! |---------|-------|----------------------|
//! | [`Pearson`] | `[-1, 1]` | yes |
//! | [`AbsPearson`] | `[0, 1]` | yes |
//! | [`Spearman`] | `[-1, 1]` | no |
//! | [`MutualInformation`] | `[0, ln bins]` | no |
//!
//! Measures flagged `already_normalized` skip quantile rescaling wherever a
//! pipeline compares maps against fixed thresholds.
//!
//! # Quick start
//!
//! ```
//! use ndarray::{Array1, Array4};
//! use telesim_similarity::{Pearson, compute};
//!
//! let field = Array4::from_shape_fn((12, 1, 2, 3), |(t, _, i, j)| (t * (i + j + 1)) as f64);
//! let reference = Array1::from_shape_fn(12, |t| t as f64);
//!
//! let map = compute(field.view(), reference.view(), 0, &Pearson).unwrap();
//! assert_eq!(map.shape(), (2, 3));
//! ```

mod compute;
mod error;
mod measure;
mod mutual_information;
mod pearson;
mod rank;
mod registry;

pub use compute::compute;
pub use error::SimilarityError;
pub use measure::{FnMeasure, SimilarityMeasure};
pub use mutual_information::MutualInformation;
pub use pearson::{AbsPearson, Pearson};
pub use rank::Spearman;
pub use registry::{MEASURE_NAMES, measure_by_name};
