// This file is part of pyseq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, seq::Sequence};

// Alloc imports
use alloc::vec::Vec;

impl<T> Sequence<T> {
    /// Panics with [`Error::Full`] unless `len` fits under [`MAX_SIZE`](Sequence::MAX_SIZE).
    #[inline]
    #[track_caller]
    pub(crate) fn assert_fits(len: usize) {
        if len > Self::MAX_SIZE {
            panic!("{}", Error::Full);
        }
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    /// Wraps an existing `Vec` without copying.
    ///
    /// # Panics
    ///
    /// Panics if `buf` is longer than [`Sequence::MAX_SIZE`], which only a
    /// zero-sized `T` can reach.
    #[track_caller]
    fn from(buf: Vec<T>) -> Self {
        Self::assert_fits(buf.len());
        Self { buf }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    #[track_caller]
    fn from(items: [T; N]) -> Self {
        Self::assert_fits(N);
        Self {
            buf: Vec::from(items),
        }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    /// # Panics
    ///
    /// Panics if `src` is longer than [`Sequence::MAX_SIZE`].
    #[track_caller]
    fn from(src: &[T]) -> Self {
        Self::assert_fits(src.len());
        Self { buf: src.to_vec() }
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(seq: Sequence<T>) -> Self {
        seq.buf
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    /// Collects through [`Extend`], so the same [`MAX_SIZE`](Sequence::MAX_SIZE)
    /// check applies.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::Full`] if the iterator yields more than
    /// [`Sequence::MAX_SIZE`] items.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Sequence, seq::unit_vec};
    use alloc::{vec, vec::Vec};

    #[test]
    fn test_from_vec_wraps_without_copy() {
        let raw = vec![1, 2, 3];
        let ptr = raw.as_ptr();
        let v = Sequence::from(raw);
        assert_eq!(v.as_slice().as_ptr(), ptr);
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn test_from_array_and_slice() {
        let a: Sequence<i32> = [1, 2].into();
        assert_eq!(a, [1, 2]);

        let src = [5, 6, 7];
        let b = Sequence::from(&src[1..]);
        assert_eq!(b, [6, 7]);
        assert_eq!(src, [5, 6, 7]);
    }

    #[test]
    fn test_into_vec_via_from() {
        let v: Vec<char> = Sequence::from(['a', 'b']).into();
        assert_eq!(v, vec!['a', 'b']);
    }

    #[test]
    fn test_collect_keeps_iteration_order() {
        let v: Sequence<u32> = (1..=4).rev().collect();
        assert_eq!(v, [4, 3, 2, 1]);
        let empty: Sequence<u32> = core::iter::empty().collect();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_from_vec_at_max_size_keeps_negative_indices() {
        let max = Sequence::<()>::MAX_SIZE;
        let mut s = Sequence::from(unit_vec(max));
        assert_eq!(s.len(), max);
        assert_eq!(s.at(-1), Ok(&()));
        assert_eq!(s.at(-(max as isize)), Ok(&()));
        assert_eq!(s.remove(-1), Ok(()));
        assert_eq!(s.len(), max - 1);
    }

    #[test]
    #[should_panic(expected = "capacity exceeded")]
    fn test_from_vec_past_max_size_panics() {
        let _ = Sequence::from(unit_vec(Sequence::<()>::MAX_SIZE + 1));
    }

    #[test]
    #[should_panic(expected = "capacity exceeded")]
    fn test_from_slice_past_max_size_panics() {
        let units = unit_vec(Sequence::<()>::MAX_SIZE + 1);
        let _ = Sequence::from(units.as_slice());
    }
}
