// This file is part of pyseq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Index normalization and `Index`/`IndexMut` support for [`Sequence`](crate::Sequence).
//!
//! User-facing indices are `isize` and may be negative: `-1` is the last
//! element, `-len` the first. Every entry point that accepts one goes through
//! [`resolve`], which checks the index against the range valid for that
//! operation and only then maps it onto the backing store.
//!
//! `seq[i]` with an `isize` index follows slice conventions and panics on an
//! out-of-range index. Absolute `usize` ranges (`seq[1..3]`, `seq[..]`, ...)
//! index the initialized elements like a slice does. There is no
//! `Index<usize>`: a literal `seq[-1]` must infer `isize`. Use
//! [`get`](crate::Sequence::get) or `as_slice()[i]` for absolute positions.

// Crate imports
use crate::{error::Error, seq::Sequence};

// Core imports
use core::ops::{
    Bound, Index, IndexMut, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo,
    RangeToInclusive,
};

/// Converts a length to the signed domain of user-facing indices.
///
/// Lengths never exceed `Sequence::MAX_SIZE == isize::MAX`, so this saturates
/// only for values that no sequence can reach.
#[inline]
pub(crate) fn signed(len: usize) -> isize {
    isize::try_from(len).unwrap_or(isize::MAX)
}

/// Checks `start <= index < end` and resolves a negative `index` to `index + len`.
///
/// The result can still be negative when `start < -len` (the slice stop
/// boundary allows `-len - 1`, meaning "before the first element").
#[inline]
pub(crate) fn resolve(index: isize, start: isize, end: isize, len: usize) -> Result<isize, Error> {
    if index < start || index >= end {
        return Err(Error::OutOfBounds { index, start, end });
    }
    Ok(if index < 0 { index + signed(len) } else { index })
}

/// Resolves an element index over `[-len, len)`.
#[inline]
pub(crate) fn element(index: isize, len: usize) -> Result<usize, Error> {
    let n = signed(len);
    // in [0, len) after a successful check
    resolve(index, -n, n, len).map(|i| i as usize)
}

/// Resolves an insertion boundary over `[-len, len + 1)`.
#[inline]
pub(crate) fn boundary(index: isize, len: usize) -> Result<usize, Error> {
    let n = signed(len);
    resolve(index, -n, n.saturating_add(1), len).map(|i| i as usize)
}

/// Turns absolute range bounds into `(start, stop)` positions without checking them.
#[inline]
pub(crate) fn bounds<R: RangeBounds<usize>>(range: &R, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => i.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let stop = match range.end_bound() {
        Bound::Included(&i) => i.saturating_add(1),
        Bound::Excluded(&i) => i,
        Bound::Unbounded => len,
    };
    (start, stop)
}

impl<T> Index<isize> for Sequence<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `i` is outside `[-len, len)`.
    fn index(&self, i: isize) -> &Self::Output {
        match self.at(i) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<isize> for Sequence<T> {
    /// # Panics
    ///
    /// Panics if `i` is outside `[-len, len)`.
    fn index_mut(&mut self, i: isize) -> &mut Self::Output {
        match self.at_mut(i) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

// Read-only ranges
impl<T> Index<Range<usize>> for Sequence<T> {
    type Output = [T];
    fn index(&self, r: Range<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeFrom<usize>> for Sequence<T> {
    type Output = [T];
    fn index(&self, r: RangeFrom<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeTo<usize>> for Sequence<T> {
    type Output = [T];
    fn index(&self, r: RangeTo<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeToInclusive<usize>> for Sequence<T> {
    type Output = [T];
    fn index(&self, r: RangeToInclusive<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeInclusive<usize>> for Sequence<T> {
    type Output = [T];
    fn index(&self, r: RangeInclusive<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeFull> for Sequence<T> {
    type Output = [T];
    fn index(&self, _: RangeFull) -> &Self::Output {
        self.as_slice()
    }
}

// Mutable ranges
impl<T> IndexMut<Range<usize>> for Sequence<T> {
    fn index_mut(&mut self, r: Range<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T> IndexMut<RangeFrom<usize>> for Sequence<T> {
    fn index_mut(&mut self, r: RangeFrom<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T> IndexMut<RangeTo<usize>> for Sequence<T> {
    fn index_mut(&mut self, r: RangeTo<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T> IndexMut<RangeToInclusive<usize>> for Sequence<T> {
    fn index_mut(&mut self, r: RangeToInclusive<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T> IndexMut<RangeInclusive<usize>> for Sequence<T> {
    fn index_mut(&mut self, r: RangeInclusive<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T> IndexMut<RangeFull> for Sequence<T> {
    fn index_mut(&mut self, _: RangeFull) -> &mut Self::Output {
        self.as_mut_slice()
    }
}
