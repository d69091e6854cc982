// This file is part of pyseq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{index, seq::Sequence};

impl<T> Sequence<T> {
    /// Rotates left by `k` so the element at index `k` becomes the first.
    ///
    /// `k` may be negative or larger than `len`; it is reduced modulo `len`
    /// into `[0, len)`. No-op when `len <= 1` or `k == 0`.
    ///
    /// # Examples
    /// ```
    /// # use pyseq::seq;
    /// let mut v = seq![1, 2, 3, 4, 5];
    /// v.rotate_left(2);
    /// assert_eq!(v, [3, 4, 5, 1, 2]);
    /// v.rotate_left(-2);
    /// assert_eq!(v, [1, 2, 3, 4, 5]);
    /// ```
    pub fn rotate_left(&mut self, k: isize) -> &mut Self {
        let len = self.len();
        if len <= 1 || k == 0 {
            return self;
        }
        let k = k.rem_euclid(index::signed(len));
        self.buf.rotate_left(k as usize);
        self
    }

    /// Rotates right by `k`; the inverse of [`rotate_left`](Sequence::rotate_left).
    ///
    /// Same normalization and no-op cases as `rotate_left`.
    pub fn rotate_right(&mut self, k: isize) -> &mut Self {
        let len = self.len();
        if len <= 1 || k == 0 {
            return self;
        }
        let k = k.rem_euclid(index::signed(len));
        self.buf.rotate_right(k as usize);
        self
    }

    /// Reverses the order of the elements in place.
    #[inline]
    pub fn reverse(&mut self) -> &mut Self {
        self.buf.reverse();
        self
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Sequence, seq};

    #[test]
    fn test_rotate_left_basic_and_wrapping() {
        let mut v = seq![1, 2, 3, 4, 5];
        v.rotate_left(1);
        assert_eq!(v, [2, 3, 4, 5, 1]);
        v.rotate_left(5);
        assert_eq!(v, [2, 3, 4, 5, 1]);
        v.rotate_left(7); // 7 % 5 == 2
        assert_eq!(v, [4, 5, 1, 2, 3]);
    }

    #[test]
    fn test_rotate_left_negative_is_right() {
        let mut v = seq![1, 2, 3, 4, 5];
        v.rotate_left(-1);
        assert_eq!(v, [5, 1, 2, 3, 4]);
    }

    #[test]
    fn test_rotate_right() {
        let mut v = seq![1, 2, 3, 4, 5];
        v.rotate_right(2);
        assert_eq!(v, [4, 5, 1, 2, 3]);
        v.rotate_right(-2);
        assert_eq!(v, [1, 2, 3, 4, 5]);
        v.rotate_right(12);
        assert_eq!(v, [4, 5, 1, 2, 3]);
    }

    #[test]
    fn test_rotate_extreme_counts() {
        let mut v = seq![1, 2, 3];
        v.rotate_left(isize::MIN).rotate_right(isize::MIN);
        assert_eq!(v, [1, 2, 3]);
        v.rotate_right(isize::MAX).rotate_left(isize::MAX);
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn test_rotate_small_sequences_are_noops() {
        let mut empty: Sequence<i32> = Sequence::new();
        empty.rotate_left(3).rotate_right(1);
        assert!(empty.is_empty());

        let mut one = seq![9];
        one.rotate_left(4).rotate_right(-2);
        assert_eq!(one, [9]);
    }

    #[test]
    fn test_reverse_twice_is_identity() {
        let mut v = seq![1, 2, 3, 4];
        v.reverse();
        assert_eq!(v, [4, 3, 2, 1]);
        v.reverse();
        assert_eq!(v, [1, 2, 3, 4]);
    }
}
