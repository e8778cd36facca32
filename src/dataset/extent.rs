//! Per-dimension min/max extents over a data set

use crate::dataset::LabeledPoint;
use crate::errors::Error;

/// Closed range of observed values along one feature dimension
///
/// Produced by [`feature_extent`]; the padding and interval helpers derive
/// display-ready ranges from the raw observed bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    /// Smallest observed value
    pub min: f64,
    /// Largest observed value
    pub max: f64,
}

impl Extent {
    /// Create an extent from explicit bounds
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the range
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Tick spacing when the range is divided into `divisions` steps
    ///
    /// # Panics
    ///
    /// Panics if `divisions` is zero.
    pub fn interval(&self, divisions: u32) -> f64 {
        assert!(divisions > 0, "divisions must be positive");
        self.span() / f64::from(divisions)
    }

    /// Widen both ends by `amount`
    pub fn padded(&self, amount: f64) -> Extent {
        Extent::new(self.min - amount, self.max + amount)
    }

    /// Widen only the low end by `amount`
    pub fn pad_low(&self, amount: f64) -> Extent {
        Extent::new(self.min - amount, self.max)
    }

    /// Widen only the high end by `amount`
    pub fn pad_high(&self, amount: f64) -> Extent {
        Extent::new(self.min, self.max + amount)
    }

    /// Check if a value falls within the range, bounds included
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Compute the min/max extent of one feature dimension across a data set
///
/// Scans every point once. Points with fewer than `axis + 1` features and
/// NaN values are skipped rather than poisoning the bounds. Returns
/// [`Error::EmptyInput`] when no usable value exists along the axis.
///
/// # Example
///
/// ```
/// use tally::dataset::{feature_extent, LabeledPoint};
///
/// let points = vec![
///     LabeledPoint::new(vec![2.0, -1.0], 0u8),
///     LabeledPoint::new(vec![5.0, 3.0], 1u8),
/// ];
///
/// let y = feature_extent(&points, 1).unwrap();
/// assert_eq!((y.min, y.max), (-1.0, 3.0));
/// ```
pub fn feature_extent<L>(points: &[LabeledPoint<L>], axis: usize) -> Result<Extent, Error> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut seen = false;

    for point in points {
        let Some(&value) = point.features.get(axis) else {
            continue;
        };
        if value.is_nan() {
            continue;
        }
        seen = true;
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }

    if seen {
        Ok(Extent::new(min, max))
    } else {
        Err(Error::EmptyInput)
    }
}
