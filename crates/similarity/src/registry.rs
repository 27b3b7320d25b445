//! Name lookup for the built-in measures.

use crate::error::SimilarityError;
use crate::measure::SimilarityMeasure;
use crate::mutual_information::MutualInformation;
use crate::pearson::{AbsPearson, Pearson};
use crate::rank::Spearman;

/// Names accepted by [`measure_by_name`].
pub const MEASURE_NAMES: [&str; 4] = ["pearson", "pearson_abs", "spearman", "mutual_information"];

/// Resolves a built-in measure by its [`SimilarityMeasure::name`].
///
/// # Errors
///
/// Returns [`SimilarityError::UnknownMeasure`] for names outside [`MEASURE_NAMES`].
pub fn measure_by_name(name: &str) -> Result<Box<dyn SimilarityMeasure>, SimilarityError> {
    match name {
        "pearson" => Ok(Box::new(Pearson)),
        "pearson_abs" => Ok(Box::new(AbsPearson)),
        "spearman" => Ok(Box::new(Spearman)),
        "mutual_information" => Ok(Box::new(MutualInformation::default())),
        _ => Err(SimilarityError::UnknownMeasure {
            name: name.to_string(),
            known: MEASURE_NAMES.join(", "),
        }),
    }
}
