// This file is part of pyseq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::seq::Sequence;

impl<T: PartialEq> Sequence<T> {
    /// Removes duplicates, keeping the first occurrence of each value in its original order.
    ///
    /// Only `PartialEq` is required: each element is compared against the
    /// survivors found so far, which is `O(len²)` but never reorders.
    ///
    /// # Examples
    /// ```
    /// # use pyseq::seq;
    /// let mut v = seq![3, 1, 2, 1, 3];
    /// v.uniquify();
    /// assert_eq!(v, [3, 1, 2]);
    /// ```
    pub fn uniquify(&mut self) -> &mut Self {
        // [0, kept) holds the survivors, in first-occurrence order
        let mut kept = 0;
        for read in 0..self.buf.len() {
            if !self.buf[..kept].contains(&self.buf[read]) {
                self.buf.swap(kept, read);
                kept += 1;
            }
        }
        self.buf.truncate(kept);
        self
    }
}
