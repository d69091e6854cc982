// This file is part of pyseq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, seq::Sequence};

// Alloc imports
use alloc::vec::Vec;

impl<T: Clone> Sequence<T> {
    /// Validates a repeat count and returns `(times, total_len)`.
    fn repeat_len(&self, times: isize) -> Result<(usize, usize), Error> {
        let times = usize::try_from(times).map_err(|_| Error::NegativeRepeat)?;
        match self.len().checked_mul(times) {
            Some(total) if total <= Self::MAX_SIZE => Ok((times, total)),
            _ => Err(Error::Full),
        }
    }

    /// Returns a new sequence holding `times` back-to-back copies of `self`.
    ///
    /// - Returns [`Error::NegativeRepeat`] if `times < 0`.
    /// - Returns [`Error::Full`] if `len * times` exceeds
    ///   [`MAX_SIZE`](Sequence::MAX_SIZE) (the product is overflow-checked).
    ///
    /// `times == 0` gives an empty sequence.
    pub fn repeat(&self, times: isize) -> Result<Self, Error> {
        let (times, total) = self.repeat_len(times)?;
        if total == 0 {
            return Ok(Self::new());
        }
        let mut buf = Vec::with_capacity(total);
        for _ in 0..times {
            buf.extend_from_slice(&self.buf);
        }
        Ok(Self { buf })
    }

    /// In-place form of [`repeat`](Sequence::repeat); same errors, and `self` is unchanged on error.
    pub fn repeat_in_place(&mut self, times: isize) -> Result<&mut Self, Error> {
        let (times, total) = self.repeat_len(times)?;
        if total == 0 {
            self.buf.clear();
            return Ok(self);
        }
        let len = self.len();
        self.buf.reserve(total - len);
        for _ in 1..times {
            self.buf.extend_from_within(..len);
        }
        Ok(self)
    }
}
