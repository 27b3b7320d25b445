//! Rescaling of similarity maps onto a shared, measure-independent scale.
//!
//! Measures live on different native ranges (correlations in `[-1, 1]`,
//! mutual information in nats). A [`ScalingFunction`] maps a
//! [`SimilarityMap`](telesim_field::SimilarityMap) onto a common range using
//! only that map's own distribution, so maps from different measures can be
//! compared against one threshold.
//!
//! [`QuantileBinning`] is the standard strategy: each cell is replaced by the
//! lower edge of the quantile bucket it falls into.
//!
//! ```
//! use telesim_field::SimilarityMap;
//! use telesim_scaling::{QuantileBinning, ScalingFunction};
//!
//! let map = SimilarityMap::from_shape_vec((1, 4), vec![3.0, 1.0, 4.0, 2.0]).unwrap();
//! let scaled = QuantileBinning::new(4).unwrap().scale(&map);
//! assert_eq!(scaled.iter().collect::<Vec<_>>(), vec![0.5, 0.0, 0.75, 0.25]);
//! ```

mod binning;
mod error;
mod scaler;

pub use binning::{DEFAULT_BINS, QuantileBinning};
pub use error::ScalingError;
pub use scaler::{FnScaling, Identity, ScalingFunction};
