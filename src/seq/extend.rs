// This file is part of pyseq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, seq::Sequence};

// Alloc imports
use alloc::vec::Vec;

impl<T> Sequence<T> {
    /// Returns `Ok(())` if `extra` more elements fit under [`MAX_SIZE`](Sequence::MAX_SIZE).
    #[inline]
    pub(crate) fn check_room(&self, extra: usize) -> Result<(), Error> {
        match self.len().checked_add(extra) {
            Some(total) if total <= Self::MAX_SIZE => Ok(()),
            _ => Err(Error::Full),
        }
    }

    /// Tries to extend `self` from an iterator, all-or-nothing.
    ///
    /// The iterator is collected first; if the combined length would exceed
    /// [`MAX_SIZE`](Sequence::MAX_SIZE) this returns [`Error::Full`] and
    /// `self` is left unchanged.
    pub fn try_extend_from_iter<I: IntoIterator<Item = T>>(
        &mut self,
        iter: I,
    ) -> Result<&mut Self, Error> {
        let tmp: Vec<T> = iter.into_iter().collect();
        self.check_room(tmp.len())?;
        self.buf.extend(tmp);
        Ok(self)
    }
}

impl<T: Clone> Sequence<T> {
    /// Appends clones of every element of `other`, in order.
    ///
    /// Returns [`Error::Full`] if the combined length would exceed
    /// [`MAX_SIZE`](Sequence::MAX_SIZE); the length sum is computed with
    /// overflow checking.
    #[inline]
    pub fn extend_with(&mut self, other: &Sequence<T>) -> Result<&mut Self, Error> {
        self.check_room(other.len())?;
        self.buf.extend_from_slice(&other.buf);
        Ok(self)
    }
}

impl<T> Extend<T> for Sequence<T> {
    /// Appends every item in iteration order.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::Full`] if an item would push the length past
    /// [`MAX_SIZE`](Sequence::MAX_SIZE). Items appended before that point stay.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.buf.reserve(iter.size_hint().0);
        for item in iter {
            if let Err(e) = self.append(item) {
                panic!("{e}");
            }
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, Sequence, seq, seq::unit_vec};

    #[test]
    fn test_extend_with_preserves_order() {
        let mut a = seq![1, 2];
        let b = seq![3, 4];
        a.extend_with(&b).unwrap();
        assert_eq!(a, [1, 2, 3, 4]);
        assert_eq!(b, [3, 4]);
    }

    #[test]
    fn test_extend_with_itself_via_clone() {
        let mut a = seq![1, 2];
        let copy = a.clone();
        a.extend_with(&copy).unwrap().extend_with(&Sequence::new()).unwrap();
        assert_eq!(a, [1, 2, 1, 2]);
    }

    #[test]
    fn test_check_room_overflow_is_full() {
        let a = seq![1, 2, 3];
        assert_eq!(a.check_room(0), Ok(()));
        assert_eq!(a.check_room(Sequence::<i32>::MAX_SIZE), Err(Error::Full));
        assert_eq!(a.check_room(usize::MAX), Err(Error::Full));
        assert_eq!(a.check_room(Sequence::<i32>::MAX_SIZE - 3), Ok(()));
    }

    #[test]
    fn test_extend_trait_appends() {
        let mut v = seq![1];
        v.extend([2, 3]);
        v.extend(&[4, 5]);
        v.extend(core::iter::empty::<i32>());
        assert_eq!(v, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_try_extend_from_iter() {
        let mut v = seq![1, 2];
        v.try_extend_from_iter(3..=4).unwrap();
        assert_eq!(v, [1, 2, 3, 4]);
        v.try_extend_from_iter(core::iter::empty()).unwrap();
        assert_eq!(v.len(), 4);
    }

    #[test]
    fn test_growth_past_max_size_is_full_and_noop() {
        let max = Sequence::<()>::MAX_SIZE;
        let mut s = Sequence::from(unit_vec(max));
        assert_eq!(s.extend_with(&seq![()]).err(), Some(Error::Full));
        assert_eq!(s.try_extend_from_iter([(), ()]).err(), Some(Error::Full));
        assert_eq!(s.len(), max);
        assert!(s.extend_with(&Sequence::new()).is_ok());
        assert!(s.try_extend_from_iter(core::iter::empty()).is_ok());
    }

    #[test]
    #[should_panic(expected = "capacity exceeded")]
    fn test_extend_trait_panics_at_max_size() {
        let mut s = Sequence::from(unit_vec(Sequence::<()>::MAX_SIZE));
        s.extend([()]);
    }
}
