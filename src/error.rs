//! Error types.
//!
//! Every fallible operation in this crate reports failure with [`Error`]. Failures are structural (a bad argument or a
//! duplicate key) and are reported as soon as they are detected; nothing is retried.

use core::fmt;

/// An error produced by a fallible operation on a [`Counted`](crate::Counted) sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Error {
    /// A [`range`](crate::primitive::range) would have run past the largest `i64`.
    OutOfRange {
        /// The first integer of the requested range.
        start: i64,
        /// The requested number of integers.
        count: usize,
    },
    /// [`Counted::to_dictionary`](crate::Counted::to_dictionary) found two elements with equal keys.
    DuplicateKey {
        /// The position of the element whose key had already been seen.
        index: usize,
    },
    /// The combined length of two sequences does not fit in a `usize`.
    CountOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { start, count } => {
                write!(f, "a range of {} integers starting at {} does not fit in an i64", count, start)
            }
            Self::DuplicateKey { index } => {
                write!(f, "the element at index {} has a key that was already present", index)
            }
            Self::CountOverflow => write!(f, "the combined count does not fit in a usize"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
