//! Dispersion and threshold classification.

use std::fmt;

use ndarray::{Array2, Zip};
use telesim_field::SimilarityMap;
use tracing::{debug, warn};

use crate::common_shape;
use crate::error::AgreementError;
use crate::statistic::AgreementStatistic;

/// Default classification threshold.
pub const DEFAULT_THRESHOLD: f64 = 0.35;

/// Agreement class of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgreementClass {
    /// Every map is at or above `1 - t`.
    High,
    /// Every map is at or below `t`.
    Low,
    /// Neither.
    Ambiguous,
}

impl AgreementClass {
    pub const ALL: [AgreementClass; 3] = [Self::High, Self::Low, Self::Ambiguous];

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
            Self::Ambiguous => "ambiguous",
        }
    }
}

impl fmt::Display for AgreementClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Checks that `threshold` is finite and in `[0, 0.5)`.
///
/// # Errors
///
/// Returns [`AgreementError::InvalidThreshold`] otherwise.
pub fn validate_threshold(threshold: f64) -> Result<(), AgreementError> {
    if threshold.is_finite() && (0.0..0.5).contains(&threshold) {
        Ok(())
    } else {
        Err(AgreementError::InvalidThreshold { threshold })
    }
}

/// Mutually exclusive, exhaustive high/low/ambiguous masks.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    high: Array2<bool>,
    low: Array2<bool>,
    ambiguous: Array2<bool>,
}

impl Classification {
    pub fn high(&self) -> &Array2<bool> {
        &self.high
    }

    pub fn low(&self) -> &Array2<bool> {
        &self.low
    }

    pub fn ambiguous(&self) -> &Array2<bool> {
        &self.ambiguous
    }

    pub fn mask(&self, class: AgreementClass) -> &Array2<bool> {
        match class {
            AgreementClass::High => &self.high,
            AgreementClass::Low => &self.low,
            AgreementClass::Ambiguous => &self.ambiguous,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.high.dim()
    }

    /// Class of cell `(lat, lon)`, `None` outside the grid.
    pub fn class_at(&self, lat: usize, lon: usize) -> Option<AgreementClass> {
        let idx = (lat, lon);
        if *self.high.get(idx)? {
            Some(AgreementClass::High)
        } else if *self.low.get(idx)? {
            Some(AgreementClass::Low)
        } else {
            Some(AgreementClass::Ambiguous)
        }
    }

    /// Number of cells in `class`.
    pub fn count(&self, class: AgreementClass) -> usize {
        self.mask(class).iter().filter(|&&b| b).count()
    }
}

/// Classifies every cell of `maps` against `threshold`.
///
/// A cell is high when all N values are `>= 1 - threshold`, low when all are
/// `<= threshold`, ambiguous otherwise. A NaN value makes its cell ambiguous.
///
/// # Errors
///
/// [`AgreementError::InvalidThreshold`], [`AgreementError::Empty`] or
/// [`AgreementError::ShapeMismatch`].
pub fn classify(maps: &[SimilarityMap], threshold: f64) -> Result<Classification, AgreementError> {
    validate_threshold(threshold)?;
    let shape = common_shape(maps)?;
    let upper = 1.0 - threshold;

    let mut high = Array2::from_elem(shape, true);
    let mut low = Array2::from_elem(shape, true);
    for map in maps {
        Zip::from(&mut high)
            .and(&mut low)
            .and(map.values())
            .for_each(|h, l, &v| {
                *h &= v >= upper;
                *l &= v <= threshold;
            });
    }
    let ambiguous = Zip::from(&high)
        .and(&low)
        .map_collect(|&h, &l| !h && !l);

    Ok(Classification {
        high,
        low,
        ambiguous,
    })
}

/// Dispersion values together with the cell classification.
#[derive(Debug, Clone, PartialEq)]
pub struct AgreementResult {
    values: SimilarityMap,
    classes: Classification,
    statistic: String,
    inverted: bool,
}

impl AgreementResult {
    /// Per-cell statistic.
    pub fn values(&self) -> &SimilarityMap {
        &self.values
    }

    pub fn classes(&self) -> &Classification {
        &self.classes
    }

    /// Name of the statistic that produced [`values`](Self::values).
    pub fn statistic(&self) -> &str {
        &self.statistic
    }

    /// Colour hint carried over from [`AgreementStatistic::inverted`].
    pub fn inverted(&self) -> bool {
        self.inverted
    }

    /// The statistic with every cell outside `class` set to NaN.
    pub fn masked(&self, class: AgreementClass) -> SimilarityMap {
        let values = Zip::from(self.values.values())
            .and(self.classes.mask(class))
            .map_collect(|&v, &keep| if keep { v } else { f64::NAN });
        SimilarityMap::new(values)
    }

    pub fn into_parts(self) -> (SimilarityMap, Classification) {
        (self.values, self.classes)
    }
}

/// Evaluates `statistic` over the N values at every cell and classifies the
/// cells with [`classify`].
///
/// # Errors
///
/// As for [`classify`].
pub fn dispersion<S>(
    maps: &[SimilarityMap],
    statistic: &S,
    threshold: f64,
) -> Result<AgreementResult, AgreementError>
where
    S: AgreementStatistic + ?Sized,
{
    let classes = classify(maps, threshold)?;
    let mut buf = Vec::with_capacity(maps.len());
    let values = Array2::from_shape_fn(classes.shape(), |idx| {
        buf.clear();
        buf.extend(maps.iter().map(|m| m.values()[idx]));
        statistic.evaluate(&buf)
    });
    let values = SimilarityMap::new(values);
    if values.is_all_nan() {
        warn!(statistic = statistic.name(), "dispersion undefined at every cell");
    }
    debug!(
        n_maps = maps.len(),
        statistic = statistic.name(),
        high = classes.count(AgreementClass::High),
        low = classes.count(AgreementClass::Low),
        "dispersion computed"
    );
    Ok(AgreementResult {
        values,
        classes,
        statistic: statistic.name().to_string(),
        inverted: statistic.inverted(),
    })
}
