// This file is part of pyseq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, index, seq::Sequence};

impl<T> Sequence<T> {
    /// Returns a reference to the element at user-facing index `i`.
    ///
    /// Negative indices count from the end: `-1` is the last element.
    /// Returns [`Error::OutOfBounds`] unless `-len <= i < len`.
    #[inline]
    pub fn at(&self, i: isize) -> Result<&T, Error> {
        let i = index::element(i, self.len())?;
        Ok(&self.buf[i])
    }

    /// Mutable counterpart of [`at`](Sequence::at).
    #[inline]
    pub fn at_mut(&mut self, i: isize) -> Result<&mut T, Error> {
        let i = index::element(i, self.len())?;
        Ok(&mut self.buf[i])
    }
}
