// This file is part of pyseq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `Sequence`.
//!
//! Every check runs before the sequence is touched, so an `Err` always means
//! the sequence is exactly as it was before the call.
//! Errors are `Copy` and implement `core::error::Error`.

/// Errors returned by fallible operations on [`Sequence`](crate::Sequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An index or boundary position fell outside its valid range `[start, end)`.
    ///
    /// `index` is reported as the caller supplied it (negative indices are
    /// not resolved), and the range is in the same user-facing terms.
    #[error("index {index} out of range [{start}, {end})")]
    OutOfBounds {
        /// The offending index.
        index: isize,
        /// Inclusive lower bound of the valid range.
        start: isize,
        /// Exclusive upper bound of the valid range.
        end: isize,
    },
    /// The operation needs at least one element.
    #[error("sequence is empty")]
    Empty,
    /// The result would hold more than [`Sequence::MAX_SIZE`](crate::Sequence::MAX_SIZE)
    /// elements, or computing its size would overflow.
    #[error("capacity exceeded")]
    Full,
    /// A slice was requested with `step == 0`.
    #[error("slice step cannot be zero")]
    ZeroStep,
    /// A repetition was requested with a negative count.
    #[error("repeat count cannot be negative")]
    NegativeRepeat,
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Index or boundary out of range.
    Index,
    /// Operation required a non-empty sequence.
    Empty,
    /// Size limit exceeded.
    Capacity,
    /// Invalid argument value.
    Value,
}

impl Error {
    /// Returns the category this error belongs to.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfBounds { .. } => ErrorKind::Index,
            Self::Empty => ErrorKind::Empty,
            Self::Full => ErrorKind::Capacity,
            Self::ZeroStep | Self::NegativeRepeat => ErrorKind::Value,
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, ErrorKind};
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::Empty);
        assert!(s.contains("empty"));
    }

    #[test]
    fn test_out_of_bounds_names_the_range() {
        let e = Error::OutOfBounds {
            index: -4,
            start: -3,
            end: 3,
        };
        assert_eq!(e.to_string(), "index -4 out of range [-3, 3)");
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::Empty.to_string(), "sequence is empty");
        assert_eq!(Error::Full.to_string(), "capacity exceeded");
        assert_eq!(Error::ZeroStep.to_string(), "slice step cannot be zero");
        assert_eq!(
            Error::NegativeRepeat.to_string(),
            "repeat count cannot be negative"
        );
    }

    #[test]
    fn test_kinds() {
        let oob = Error::OutOfBounds {
            index: 0,
            start: 0,
            end: 0,
        };
        assert_eq!(oob.kind(), ErrorKind::Index);
        assert_eq!(Error::Empty.kind(), ErrorKind::Empty);
        assert_eq!(Error::Full.kind(), ErrorKind::Capacity);
        assert_eq!(Error::ZeroStep.kind(), ErrorKind::Value);
        assert_eq!(Error::NegativeRepeat.kind(), ErrorKind::Value);
    }
}
