//! Element-wise combination of two similarity maps.
//!
//! A [`CombinationFunction`] turns two cell values into one. [`combine`]
//! applies it to every cell of two equally shaped maps. Two wrappers anchor
//! the first map as a correlation:
//!
//! - [`PowerCombination`] drops the correlation's direction: `f(|p|, s)`.
//! - [`SignedStrength`] keeps it: `sign(p) * f(|p|, |s|)`.
//!
//! ```
//! use telesim_combine::{Product, sign_of_correlation_and_combined_strength};
//! use telesim_field::SimilarityMap;
//!
//! let pearson = SimilarityMap::from_shape_vec((1, 2), vec![-0.5, 0.8]).unwrap();
//! let other = SimilarityMap::from_shape_vec((1, 2), vec![0.4, -0.5]).unwrap();
//! let out = sign_of_correlation_and_combined_strength(&pearson, &other, &Product).unwrap();
//! assert_eq!(out.iter().collect::<Vec<_>>(), vec![-0.2, 0.4]);
//! ```

mod combination;
mod error;
mod ops;

pub use combination::{
    CombinationFunction, FnCombination, Max, Mean, Min, PowerCombination, Product, SignedStrength,
};
pub use error::CombineError;
pub use ops::{combine, power_combination, sign_of_correlation_and_combined_strength};
