// This file is part of pyseq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, index, seq::Sequence};

// Alloc imports
use alloc::vec::Vec;

impl<T: Clone> Sequence<T> {
    /// Returns a new sequence with the elements at `start, start + step, …`, stopping before `stop`.
    ///
    /// - `step > 0` walks forward while the position is `< stop`; `step < 0`
    ///   walks backward while it is `> stop`. `stop` itself is never included.
    /// - `start` is an element index in `[-len, len)`; `stop` is a boundary
    ///   in `[-len - 1, len + 1)`, so both ends are reachable in either
    ///   direction (`stop == -len - 1` walks back through index 0).
    /// - A range that is empty in the direction of `step` gives an empty result.
    ///
    /// Errors: [`Error::ZeroStep`] if `step == 0`, [`Error::OutOfBounds`] if
    /// `start` or `stop` is outside its range. An empty sequence has no valid
    /// `start`.
    ///
    /// # Examples
    /// ```
    /// # use pyseq::seq;
    /// let v = seq![1, 2, 3, 4, 5];
    /// assert_eq!(v.slice(1, 4, 1).unwrap(), [2, 3, 4]);
    /// assert_eq!(v.slice(-1, -4, -1).unwrap(), [5, 4, 3]);
    /// assert_eq!(v.slice(0, 5, 2).unwrap(), [1, 3, 5]);
    /// assert_eq!(v.slice(-1, -6, -1).unwrap(), [5, 4, 3, 2, 1]);
    /// ```
    pub fn slice(&self, start: isize, stop: isize, step: isize) -> Result<Self, Error> {
        if step == 0 {
            return Err(Error::ZeroStep);
        }
        let len = self.len();
        let n = index::signed(len);
        let start = index::resolve(start, -n, n, len)?;
        let stop = index::resolve(stop, -n - 1, n.saturating_add(1), len)?;

        // every position produced below lies in [0, len)
        let stride = step.unsigned_abs();
        let buf: Vec<T> = if step > 0 {
            (start..stop)
                .step_by(stride)
                .map(|i| self.buf[i as usize].clone())
                .collect()
        } else {
            (stop + 1..=start)
                .rev()
                .step_by(stride)
                .map(|i| self.buf[i as usize].clone())
                .collect()
        };
        Ok(Self { buf })
    }
}
