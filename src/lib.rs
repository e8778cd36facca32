//! # Tally
//!
//! Exact counting and selection primitives for small data sets.
//!
//! Tally provides the handful of reductions that classification and
//! exploratory-analysis code reaches for first: exact occurrence counting
//! with mode lookup, arg-min / arg-max selection under a key projection, and
//! per-dimension extents over labeled points.
//!
//! ## Features
//!
//! - **Frequency Counting**: Exact per-value counts and the mode, over any
//!   hashable type
//! - **Keyed Selection**: Find the element minimizing or maximizing a
//!   caller-supplied key, without ordering the element type
//! - **Labeled Data**: A feature-vector-plus-label point type and padded
//!   min/max extents along a feature dimension
//!
//! ## Quick Start
//!
//! ```rust
//! use tally::prelude::*;
//!
//! // Count label occurrences exactly
//! let votes: FrequencyCounter<&str> =
//!     ["spam", "ham", "spam", "spam"].into_iter().collect();
//! let (winner, count) = votes.mode().unwrap();
//! assert_eq!((*winner, count), ("spam", 3));
//!
//! // Pick the nearest neighbor by projected distance
//! let nearest = min_by_key([4.0_f64, -1.0, 3.0], |x| x.abs()).unwrap();
//! assert_eq!(nearest, -1.0);
//! ```
//!
//! ## Working With Labeled Data
//!
//! The `dataset` family carries the data model the reductions are usually
//! applied to. Counting labels is a `collect`:
//!
//! ```rust
//! use tally::dataset::{feature_extent, LabeledPoint};
//! use tally::frequency::FrequencyCounter;
//!
//! let points = vec![
//!     LabeledPoint::new(vec![1.0, 2.0], "a"),
//!     LabeledPoint::new(vec![4.0, 0.5], "b"),
//!     LabeledPoint::new(vec![2.5, 1.0], "a"),
//! ];
//!
//! let labels: FrequencyCounter<&str> =
//!     points.iter().map(|p| p.label).collect();
//! assert_eq!(labels.get("a"), 2);
//!
//! let x = feature_extent(&points, 0).unwrap();
//! assert_eq!((x.min, x.max), (1.0, 4.0));
//! ```
//!
//! ## Feature Flags
//!
//! Algorithm families (pick what you need):
//! - `frequency` (default): Exact frequency counter with mode lookup
//! - `select` (default): Keyed min/max selection
//! - `dataset` (default): Labeled points and feature extents
//! - `full`: Enable all algorithm families
//!
//! Platform features:
//! - `serde`: Enable serialization for data-carrying types

#![cfg_attr(docsrs, feature(doc_cfg))]

// Error type always available
pub mod errors;

pub mod math;

#[cfg(feature = "frequency")]
#[cfg_attr(docsrs, doc(cfg(feature = "frequency")))]
pub mod frequency;

#[cfg(feature = "select")]
#[cfg_attr(docsrs, doc(cfg(feature = "select")))]
pub mod select;

#[cfg(feature = "dataset")]
#[cfg_attr(docsrs, doc(cfg(feature = "dataset")))]
pub mod dataset;

pub mod prelude {
    pub use crate::errors::Error;

    #[cfg(feature = "frequency")]
    pub use crate::frequency::FrequencyCounter;

    #[cfg(feature = "select")]
    pub use crate::select::{max_by_key, min_by_key};

    #[cfg(feature = "dataset")]
    pub use crate::dataset::{feature_extent, Extent, LabeledPoint};
}

#[cfg(feature = "frequency")]
pub use frequency::FrequencyCounter;

#[cfg(feature = "dataset")]
pub use dataset::{Extent, LabeledPoint};
