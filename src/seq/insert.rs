// This file is part of pyseq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, index, seq::Sequence};

impl<T> Sequence<T> {
    /// Inserts `element` before user-facing boundary `index`, shifting the tail right.
    ///
    /// Valid boundaries are `-len..=len`; `index == len` appends.
    ///
    /// - Returns [`Error::Full`] if the sequence is already at [`MAX_SIZE`](Sequence::MAX_SIZE).
    /// - Returns [`Error::OutOfBounds`] if `index` is outside `[-len, len + 1)`.
    #[inline]
    pub fn insert(&mut self, index: isize, element: T) -> Result<(), Error> {
        if self.len() >= Self::MAX_SIZE {
            return Err(Error::Full);
        }
        let at = index::boundary(index, self.len())?;
        self.buf.insert(at, element);
        Ok(())
    }

    /// Appends `element` to the end. Amortized `O(1)`.
    ///
    /// Returns [`Error::Full`] if the sequence is already at [`MAX_SIZE`](Sequence::MAX_SIZE).
    #[inline]
    pub fn append(&mut self, element: T) -> Result<&mut Self, Error> {
        if self.len() >= Self::MAX_SIZE {
            return Err(Error::Full);
        }
        self.buf.push(element);
        Ok(self)
    }
}
