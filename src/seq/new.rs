// This file is part of pyseq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::seq::Sequence;

// Alloc imports
use alloc::{vec, vec::Vec};

impl<T> Sequence<T> {
    /// Constructs an empty sequence without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Constructs an empty sequence with room for at least `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Constructs a sequence of `n` clones of `value`.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::Full`](crate::Error::Full) if `n` exceeds
    /// [`MAX_SIZE`](Sequence::MAX_SIZE).
    #[inline]
    #[track_caller]
    pub fn from_elem(value: T, n: usize) -> Self
    where
        T: Clone,
    {
        Self::assert_fits(n);
        Self { buf: vec![value; n] }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}
