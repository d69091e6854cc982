// This file is part of pyseq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{index, seq::Sequence};

// Core imports
use core::ops::RangeBounds;

impl<T: PartialEq> Sequence<T> {
    /// Returns the position of the first element equal to `element`, or `None`.
    #[inline]
    pub fn find(&self, element: &T) -> Option<usize> {
        self.buf.iter().position(|e| e == element)
    }

    /// Returns the position of the first `element` inside the absolute window `range`.
    ///
    /// The window is clamped to `[0, len)` rather than bounds-checked: a stop
    /// past the end just scans to the end, and an empty or inverted window
    /// finds nothing. The returned position is absolute, not window-relative.
    ///
    /// # Examples
    /// ```
    /// # use pyseq::seq;
    /// let v = seq![1, 2, 1, 2];
    /// assert_eq!(v.index_of(&1, ..), Some(0));
    /// assert_eq!(v.index_of(&1, 1..), Some(2));
    /// assert_eq!(v.index_of(&1, 1..2), None);
    /// assert_eq!(v.index_of(&2, 2..100), Some(3));
    /// ```
    pub fn index_of<R>(&self, element: &T, range: R) -> Option<usize>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len();
        let (start, stop) = index::bounds(&range, len);
        let stop = stop.min(len);
        if start >= stop {
            return None;
        }
        self.buf[start..stop]
            .iter()
            .position(|e| e == element)
            .map(|p| p + start)
    }

    /// Returns `true` if `element` occurs inside `range` (same clamping as [`index_of`](Sequence::index_of)).
    #[inline]
    pub fn contains<R>(&self, element: &T, range: R) -> bool
    where
        R: RangeBounds<usize>,
    {
        self.index_of(element, range).is_some()
    }

    /// Counts the occurrences of `element` in the whole sequence.
    #[inline]
    pub fn count(&self, element: &T) -> usize {
        self.buf.iter().filter(|e| *e == element).count()
    }
}
