//! Error types shared across algorithm families
//!
//! Every fallible operation in this crate fails for exactly one reason:
//! it was asked to reduce zero elements. [`Error`] distinguishes the two
//! places that can happen.

/// Error from a reduction over zero elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `mode` was called on a counter that has never had any entries
    EmptyCollection,
    /// A selection or extent scan was given an empty input sequence
    EmptyInput,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::EmptyCollection => write!(f, "counter has no entries"),
            Error::EmptyInput => write!(f, "input sequence is empty"),
        }
    }
}

impl std::error::Error for Error {}
