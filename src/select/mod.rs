//! Keyed selection over sequences
//!
//! This module provides arg-min / arg-max style reductions: find the element
//! of a sequence that minimizes (or maximizes) a caller-supplied key
//! projection, without requiring the element type itself to be orderable.
//!
//! # Example
//!
//! ```
//! use tally::select::min_by_key;
//!
//! let points = vec![[1.0, 5.0], [2.0, 1.0], [0.0, 9.0]];
//! let closest = min_by_key(points, |p| p[1]).unwrap();
//! assert_eq!(closest, [2.0, 1.0]);
//! ```

mod extrema;

pub use extrema::{max_by_key, min_by_key};
