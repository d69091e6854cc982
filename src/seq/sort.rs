// This file is part of pyseq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::seq::Sequence;

// Core imports
use core::cmp::Ordering;

impl<T> Sequence<T> {
    /// Stable sort by `T`'s natural order.
    #[inline]
    pub fn sort(&mut self) -> &mut Self
    where
        T: Ord,
    {
        self.buf.sort();
        self
    }

    /// Stable sort with a comparator.
    ///
    /// Elements the comparator reports as `Equal` keep their relative order.
    /// A comparator that is not a total order yields an unspecified order
    /// (and may panic), but the sequence still holds exactly the original
    /// elements.
    #[inline]
    pub fn sort_by<F>(&mut self, compare: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.buf.sort_by(compare);
        self
    }

    /// Stable sort by a key extracted from each element.
    #[inline]
    pub fn sort_by_key<K, F>(&mut self, key: F) -> &mut Self
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        self.buf.sort_by_key(key);
        self
    }
}
