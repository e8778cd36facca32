//! Exact occurrence counter backed by a hash map
//!
//! Counts how many times each value appears in a stream of observations and
//! reports the mode (most frequent value).

use crate::errors::Error;
use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;
use std::collections::HashMap;

/// Exact occurrence counter for hashable values
///
/// Each observed value maps to a signed count. Observation (`add`, `extend`,
/// `collect`) increments counts by one; [`set`](FrequencyCounter::set)
/// overwrites a count with any value, including zero or negative, without
/// validation. Keys are never removed once present, and a key that has only
/// ever been queried is not materialized.
///
/// # Example
///
/// ```
/// use tally::frequency::FrequencyCounter;
///
/// let mut counter = FrequencyCounter::from_items(["a", "a", "a", "b", "b"]);
///
/// assert_eq!(counter.get("a"), 3);
/// assert_eq!(counter.get("b"), 2);
/// assert_eq!(counter.get("c"), 0);
///
/// let (value, count) = counter.mode().unwrap();
/// assert_eq!((*value, count), ("a", 3));
///
/// counter.set("c", 10);
/// assert_eq!(counter.get("c"), 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrequencyCounter<T: Hash + Eq> {
    /// Map from value to occurrence count
    counts: HashMap<T, i64>,
}

impl<T: Hash + Eq> Default for FrequencyCounter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> FrequencyCounter<T> {
    /// Create an empty counter
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Create a counter by observing every item in a sequence once
    ///
    /// Each element increments its value's count by one, starting from zero
    /// for unseen values. An empty sequence yields an empty counter.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut counter = Self::new();
        counter.extend(items);
        counter
    }

    /// Observe an item, incrementing its count by one
    pub fn add(&mut self, item: T) {
        self.add_count(item, 1);
    }

    /// Observe an item with a specific count
    ///
    /// The count is added arithmetically; a negative `count` decreases the
    /// stored value and may drive it below zero.
    pub fn add_count(&mut self, item: T, count: i64) {
        *self.counts.entry(item).or_insert(0) += count;
    }

    /// Get the current count for an item
    ///
    /// Returns 0 for an item that has never been observed or set. The item
    /// is not materialized in the counter by the lookup.
    pub fn get<Q>(&self, item: &Q) -> i64
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.counts.get(item) {
            Some(count) => *count,
            None => 0,
        }
    }

    /// Overwrite the count for an item
    ///
    /// No validation is performed: `value` may be zero or negative, and
    /// `item` may be a value never observed before. Entries written this way
    /// participate in [`mode`](FrequencyCounter::mode) like any other.
    pub fn set(&mut self, item: T, value: i64) {
        self.counts.insert(item, value);
    }

    /// Get the most frequent value and its count
    ///
    /// Scans all entries once, seeded with a running maximum of 0, and takes
    /// the first enumerated key whose count strictly exceeds the running
    /// maximum. Under ties the winner depends on hash-iteration order and is
    /// therefore not deterministic; if every count is zero or negative, the
    /// returned count is 0 and the key is an arbitrary entry.
    ///
    /// Returns [`Error::EmptyCollection`] when the counter has no entries.
    pub fn mode(&self) -> Result<(&T, i64), Error> {
        let mut entries = self.counts.iter();
        let (first_key, _) = entries.next().ok_or(Error::EmptyCollection)?;

        let mut best_key = first_key;
        let mut best_count = 0;
        for (key, &count) in self.counts.iter() {
            if count > best_count {
                best_key = key;
                best_count = count;
            }
        }
        Ok((best_key, best_count))
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the counter has no entries
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over entries as `(value, count)` pairs
    ///
    /// Iteration order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&T, i64)> {
        self.counts.iter().map(|(key, &count)| (key, count))
    }

    /// Reset the counter to the empty state
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

impl<T: Hash + Eq> Extend<T> for FrequencyCounter<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.add(item);
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for FrequencyCounter<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::from_items(items)
    }
}

impl<T: Hash + Eq + fmt::Debug> fmt::Display for FrequencyCounter<T> {
    /// Debug rendering of the full mapping; the format is not a contract
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.counts.iter()).finish()
    }
}
