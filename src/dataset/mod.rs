//! Labeled data points and per-dimension extents
//!
//! This module provides the small data model shared by classification
//! exercises: a numeric feature vector paired with a categorical label, and
//! the min/max extent of one feature dimension across a data set (the
//! computation a plotting or binning consumer needs for its ranges).
//!
//! # Example
//!
//! ```
//! use tally::dataset::{feature_extent, LabeledPoint};
//!
//! let points = vec![
//!     LabeledPoint::new(vec![1.0, 4.0], "a"),
//!     LabeledPoint::new(vec![3.0, 2.0], "b"),
//!     LabeledPoint::new(vec![2.0, 8.0], "a"),
//! ];
//!
//! let x = feature_extent(&points, 0).unwrap();
//! assert_eq!((x.min, x.max), (1.0, 3.0));
//!
//! // Widen by one tick for display headroom
//! let padded = x.padded(x.interval(10));
//! assert!(padded.contains(3.1));
//! ```

mod extent;
mod labeled;

pub use extent::{feature_extent, Extent};
pub use labeled::LabeledPoint;
