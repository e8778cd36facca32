//! Arg-min / arg-max reductions under a key projection
//!
//! One generic function covers every element type, scalar or vector; the key
//! type only needs `PartialOrd`, so plain `f64` projections work directly.

use crate::errors::Error;

/// Find the element minimizing a key projection
///
/// Seeds the scan with the first element, then replaces the running best
/// whenever a **strictly smaller** key is found, so the earliest element
/// wins ties. The key function is evaluated exactly once per element; the
/// scan is O(n) time and O(1) extra space.
///
/// A key that does not compare against the current best (a NaN on either
/// side) never displaces it.
///
/// Returns [`Error::EmptyInput`] when the sequence has no elements.
///
/// # Example
///
/// ```
/// use tally::select::min_by_key;
///
/// assert_eq!(min_by_key([3, 1, 2], |&x| x).unwrap(), 1);
///
/// // Ties keep the earliest element
/// let pairs = [(1, "x"), (1, "y")];
/// assert_eq!(min_by_key(pairs, |p| p.0).unwrap(), (1, "x"));
/// ```
pub fn min_by_key<I, K, F>(items: I, mut key: F) -> Result<I::Item, Error>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: PartialOrd,
{
    let mut items = items.into_iter();
    let mut best = items.next().ok_or(Error::EmptyInput)?;
    let mut best_key = key(&best);

    for item in items {
        let item_key = key(&item);
        if item_key < best_key {
            best = item;
            best_key = item_key;
        }
    }
    Ok(best)
}

/// Find the element maximizing a key projection
///
/// The mirror of [`min_by_key`]: strictly greater keys win, so the earliest
/// element wins ties. Same error and complexity contract.
///
/// # Example
///
/// ```
/// use tally::select::max_by_key;
///
/// assert_eq!(max_by_key([3, 1, 2], |&x| x).unwrap(), 3);
/// ```
pub fn max_by_key<I, K, F>(items: I, mut key: F) -> Result<I::Item, Error>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: PartialOrd,
{
    let mut items = items.into_iter();
    let mut best = items.next().ok_or(Error::EmptyInput)?;
    let mut best_key = key(&best);

    for item in items {
        let item_key = key(&item);
        if item_key > best_key {
            best = item;
            best_key = item_key;
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_identity_key() {
        assert_eq!(min_by_key([3, 1, 2], |&x| x).unwrap(), 1);
    }

    #[test]
    fn test_min_empty_input_fails() {
        let empty: [i32; 0] = [];
        assert_eq!(min_by_key(empty, |&x| x), Err(Error::EmptyInput));
    }

    #[test]
    fn test_min_single_element() {
        assert_eq!(min_by_key([42], |&x| x).unwrap(), 42);
    }

    #[test]
    fn test_min_over_vectors() {
        let points = vec![vec![1.0, 5.0], vec![2.0, 1.0], vec![0.0, 9.0]];
        assert_eq!(min_by_key(points, |p| p[1]).unwrap(), vec![2.0, 1.0]);
    }

    #[test]
    fn test_min_ties_keep_earliest() {
        let pairs = [(1, "x"), (1, "y")];
        assert_eq!(min_by_key(pairs, |p| p.0).unwrap(), (1, "x"));
    }

    #[test]
    fn test_min_key_called_once_per_element() {
        let mut calls = 0;
        let _ = min_by_key([5, 3, 4, 1, 2], |&x| {
            calls += 1;
            x
        });
        assert_eq!(calls, 5);
    }

    #[test]
    fn test_min_nan_keys_never_win() {
        let values = [2.0, f64::NAN, 1.0];
        assert_eq!(min_by_key(values, |&x| x).unwrap(), 1.0);
    }

    #[test]
    fn test_min_nan_seed_sticks() {
        // A NaN seed compares with nothing, so the first element survives
        let values = [f64::NAN, 1.0, 2.0];
        assert!(min_by_key(values, |&x| x).unwrap().is_nan());
    }

    #[test]
    fn test_max_identity_key() {
        assert_eq!(max_by_key([3, 1, 2], |&x| x).unwrap(), 3);
    }

    #[test]
    fn test_max_empty_input_fails() {
        let empty: [i32; 0] = [];
        assert_eq!(max_by_key(empty, |&x| x), Err(Error::EmptyInput));
    }

    #[test]
    fn test_max_ties_keep_earliest() {
        let pairs = [(7, "x"), (7, "y")];
        assert_eq!(max_by_key(pairs, |p| p.0).unwrap(), (7, "x"));
    }

    #[test]
    fn test_min_by_projection_of_unorderable_elements() {
        // Element type has no ordering; only the projected key does
        #[derive(Debug, PartialEq)]
        struct Reading {
            sensor: &'static str,
            value: f64,
        }

        let readings = [
            Reading { sensor: "a", value: 3.5 },
            Reading { sensor: "b", value: 0.5 },
            Reading { sensor: "c", value: 2.0 },
        ];
        let lowest = min_by_key(readings, |r| r.value).unwrap();
        assert_eq!(lowest.sensor, "b");
    }
}
