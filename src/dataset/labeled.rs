//! Labeled data point type

/// A numeric feature vector paired with a categorical label
///
/// The label type is caller-supplied: an enum, a string, an integer class
/// id. Fields are public; the struct is plain data.
///
/// # Example
///
/// ```
/// use tally::dataset::LabeledPoint;
///
/// let point = LabeledPoint::new(vec![0.5, 2.0], "positive");
/// assert_eq!(point.dimension(), 2);
/// assert_eq!(point.label, "positive");
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabeledPoint<L> {
    /// Feature values, one per dimension
    pub features: Vec<f64>,
    /// Category label
    pub label: L,
}

impl<L> LabeledPoint<L> {
    /// Create a labeled point
    pub fn new(features: Vec<f64>, label: L) -> Self {
        Self { features, label }
    }

    /// Number of feature dimensions
    pub fn dimension(&self) -> usize {
        self.features.len()
    }
}
