//! Exact frequency counting
//!
//! This module provides an exact occurrence counter over hashable values.
//! Unlike a probabilistic sketch, every count is precise; the trade-off is
//! O(distinct items) memory.
//!
//! # Example
//!
//! ```
//! use tally::frequency::FrequencyCounter;
//!
//! let counter: FrequencyCounter<&str> =
//!     ["red", "blue", "red", "green", "red"].into_iter().collect();
//!
//! assert_eq!(counter.get("red"), 3);
//! assert_eq!(counter.get("yellow"), 0);
//!
//! let (value, count) = counter.mode().unwrap();
//! assert_eq!((*value, count), ("red", 3));
//! ```

mod counter;

pub use counter::FrequencyCounter;
