// This file is part of pyseq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, index, seq::Sequence};

// Core imports
use core::ops::RangeBounds;

impl<T> Sequence<T> {
    /// Removes and returns the element at user-facing index `index`, shifting the tail left.
    ///
    /// - Returns [`Error::Empty`] if the sequence is empty.
    /// - Returns [`Error::OutOfBounds`] unless `-len <= index < len`.
    #[inline]
    pub fn remove(&mut self, index: isize) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let at = index::element(index, self.len())?;
        Ok(self.buf.remove(at))
    }

    /// Removes the absolute positions `range` (`[start, stop)`).
    ///
    /// Both bounds must lie in `[0, len]`, otherwise [`Error::OutOfBounds`] is
    /// returned and nothing is removed. A range with `start >= stop` removes
    /// nothing.
    ///
    /// # Examples
    /// ```
    /// # use pyseq::seq;
    /// let mut v = seq![1, 2, 3, 4, 5];
    /// v.erase(1..3).unwrap();
    /// assert_eq!(v, [1, 4, 5]);
    /// assert!(v.erase(2..4).is_err());
    /// ```
    pub fn erase<R>(&mut self, range: R) -> Result<&mut Self, Error>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len();
        let (start, stop) = index::bounds(&range, len);
        for bound in [start, stop] {
            if bound > len {
                return Err(Error::OutOfBounds {
                    index: index::signed(bound),
                    start: 0,
                    end: index::signed(len).saturating_add(1),
                });
            }
        }
        if start < stop {
            self.buf.drain(start..stop);
        }
        Ok(self)
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Removes the first element equal to `element`. No-op if there is none.
    #[inline]
    pub fn remove_first(&mut self, element: &T) -> &mut Self {
        if let Some(at) = self.find(element) {
            self.buf.remove(at);
        }
        self
    }

    /// Removes every element equal to `element`, keeping the survivors in order.
    ///
    /// `O(len)`.
    #[inline]
    pub fn remove_all(&mut self, element: &T) -> &mut Self {
        self.buf.retain(|e| e != element);
        self
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, Sequence, seq};

    #[test]
    fn test_remove_returns_value_and_shifts() {
        let mut v = seq![1, 2, 3, 4, 5];
        assert_eq!(v.remove(2), Ok(3));
        assert_eq!(v, [1, 2, 4, 5]);
        assert_eq!(v.remove(-1), Ok(5));
        assert_eq!(v.remove(0), Ok(1));
        assert_eq!(v, [2, 4]);
    }

    #[test]
    fn test_remove_from_empty_is_empty_error() {
        let mut v: Sequence<i32> = Sequence::new();
        assert_eq!(v.remove(0), Err(Error::Empty));
        assert_eq!(v.remove(-1), Err(Error::Empty));
    }

    #[test]
    fn test_remove_out_of_bounds_is_noop() {
        let mut v = seq![1, 2];
        assert_eq!(
            v.remove(2),
            Err(Error::OutOfBounds {
                index: 2,
                start: -2,
                end: 2
            })
        );
        assert!(v.remove(-3).is_err());
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn test_remove_first_only_first() {
        let mut v = seq![1, 2, 1, 3];
        v.remove_first(&1);
        assert_eq!(v, [2, 1, 3]);
        v.remove_first(&9);
        assert_eq!(v, [2, 1, 3]);
    }

    #[test]
    fn test_remove_all_is_stable() {
        let mut v = seq![1, 2, 1, 3, 1, 4];
        v.remove_all(&1);
        assert_eq!(v, [2, 3, 4]);
        v.remove_all(&7);
        assert_eq!(v, [2, 3, 4]);

        let mut all = seq![5, 5, 5];
        all.remove_all(&5);
        assert!(all.is_empty());
    }

    #[test]
    fn test_erase_ranges() {
        let mut v = seq![0, 1, 2, 3, 4, 5];
        v.erase(4..).unwrap();
        assert_eq!(v, [0, 1, 2, 3]);
        v.erase(..1).unwrap();
        assert_eq!(v, [1, 2, 3]);
        v.erase(1..=1).unwrap();
        assert_eq!(v, [1, 3]);
        v.erase(..).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn test_erase_allows_len_as_bound() {
        let mut v = seq![1, 2, 3];
        v.erase(3..3).unwrap();
        v.erase(0..3).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_erase_inverted_range_is_noop() {
        let mut v = seq![1, 2, 3];
        v.erase(2..1).unwrap();
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn test_erase_out_of_bounds_errors_and_is_noop() {
        let mut v = seq![1, 2, 3];
        assert_eq!(
            v.erase(1..5).unwrap_err(),
            Error::OutOfBounds {
                index: 5,
                start: 0,
                end: 4
            }
        );
        assert!(v.erase(4..).is_err());
        assert!(v.erase(..=3).is_err());
        assert_eq!(v, [1, 2, 3]);
    }
}
