// This file is part of pyseq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! List arithmetic for [`Sequence`](crate::Sequence).
//!
//! | operator | in place | named method |
//! |---|---|---|
//! | `s + x` / `s += x` | append `x` | [`append`](crate::Sequence::append) |
//! | `s + t` / `s += t` | append all of `t` | [`extend_with`](crate::Sequence::extend_with) |
//! | `s - x` / `s -= x` | drop first `x` | [`remove_first`](crate::Sequence::remove_first) |
//! | `s * k` / `s *= k` | `k` copies | [`repeat`](crate::Sequence::repeat), [`repeat_in_place`](crate::Sequence::repeat_in_place) |
//! | `s / x` / `s /= x` | drop every `x` | [`remove_all`](crate::Sequence::remove_all) |
//! | `s <<= k`, `s >>= k` | rotate | [`rotate_left`](crate::Sequence::rotate_left), [`rotate_right`](crate::Sequence::rotate_right) |
//!
//! Binary operators on `&Sequence` clone the receiver, apply the in-place
//! form to the clone and return it; the receiver is never modified. On an
//! owned `Sequence` they reuse its buffer.
//!
//! Operators cannot return `Result`, so where the named method would return
//! an [`Error`](crate::Error) the operator panics with its message.

// Crate imports
use crate::{error::Error, seq::Sequence};

// Core imports
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, ShlAssign, ShrAssign, Sub, SubAssign,
};

#[inline]
#[track_caller]
fn or_panic<V>(res: Result<V, Error>) -> V {
    match res {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}

// In-place forms
impl<T> AddAssign<T> for Sequence<T> {
    /// # Panics
    ///
    /// Panics if the sequence is at [`Sequence::MAX_SIZE`].
    #[track_caller]
    fn add_assign(&mut self, element: T) {
        or_panic(self.append(element));
    }
}

impl<T: Clone> AddAssign<&Sequence<T>> for Sequence<T> {
    /// # Panics
    ///
    /// Panics if the combined length would exceed [`Sequence::MAX_SIZE`].
    #[track_caller]
    fn add_assign(&mut self, other: &Sequence<T>) {
        or_panic(self.extend_with(other));
    }
}

impl<T> AddAssign<Sequence<T>> for Sequence<T> {
    /// # Panics
    ///
    /// Panics if the combined length would exceed [`Sequence::MAX_SIZE`].
    #[track_caller]
    fn add_assign(&mut self, other: Sequence<T>) {
        or_panic(self.check_room(other.len()));
        self.buf.extend(other.buf);
    }
}

impl<T: PartialEq> SubAssign<T> for Sequence<T> {
    fn sub_assign(&mut self, element: T) {
        self.remove_first(&element);
    }
}

impl<T: Clone> MulAssign<isize> for Sequence<T> {
    /// # Panics
    ///
    /// Panics if `times < 0` or the result would exceed [`Sequence::MAX_SIZE`].
    #[track_caller]
    fn mul_assign(&mut self, times: isize) {
        or_panic(self.repeat_in_place(times));
    }
}

impl<T: PartialEq> DivAssign<T> for Sequence<T> {
    fn div_assign(&mut self, element: T) {
        self.remove_all(&element);
    }
}

impl<T> ShlAssign<isize> for Sequence<T> {
    fn shl_assign(&mut self, k: isize) {
        self.rotate_left(k);
    }
}

impl<T> ShrAssign<isize> for Sequence<T> {
    fn shr_assign(&mut self, k: isize) {
        self.rotate_right(k);
    }
}

// Copy-producing forms on a borrowed receiver
impl<T: Clone> Add<T> for &Sequence<T> {
    type Output = Sequence<T>;

    #[track_caller]
    fn add(self, element: T) -> Sequence<T> {
        let mut out = self.clone();
        out += element;
        out
    }
}

impl<T: Clone> Add<&Sequence<T>> for &Sequence<T> {
    type Output = Sequence<T>;

    #[track_caller]
    fn add(self, other: &Sequence<T>) -> Sequence<T> {
        or_panic(self.check_room(other.len()));
        let mut out = Sequence::with_capacity(self.len() + other.len());
        out.buf.extend_from_slice(&self.buf);
        out.buf.extend_from_slice(&other.buf);
        out
    }
}

impl<T: Clone + PartialEq> Sub<T> for &Sequence<T> {
    type Output = Sequence<T>;

    fn sub(self, element: T) -> Sequence<T> {
        let mut out = self.clone();
        out -= element;
        out
    }
}

impl<T: Clone> Mul<isize> for &Sequence<T> {
    type Output = Sequence<T>;

    /// # Panics
    ///
    /// Panics if `times < 0` or the result would exceed [`Sequence::MAX_SIZE`].
    #[track_caller]
    fn mul(self, times: isize) -> Sequence<T> {
        or_panic(self.repeat(times))
    }
}

impl<T: Clone + PartialEq> Div<T> for &Sequence<T> {
    type Output = Sequence<T>;

    fn div(self, element: T) -> Sequence<T> {
        let mut out = self.clone();
        out /= element;
        out
    }
}

// Consuming forms on an owned receiver
impl<T> Add<T> for Sequence<T> {
    type Output = Sequence<T>;

    #[track_caller]
    fn add(mut self, element: T) -> Sequence<T> {
        self += element;
        self
    }
}

impl<T: Clone> Add<&Sequence<T>> for Sequence<T> {
    type Output = Sequence<T>;

    #[track_caller]
    fn add(mut self, other: &Sequence<T>) -> Sequence<T> {
        self += other;
        self
    }
}

impl<T> Add<Sequence<T>> for Sequence<T> {
    type Output = Sequence<T>;

    #[track_caller]
    fn add(mut self, other: Sequence<T>) -> Sequence<T> {
        self += other;
        self
    }
}

impl<T: PartialEq> Sub<T> for Sequence<T> {
    type Output = Sequence<T>;

    fn sub(mut self, element: T) -> Sequence<T> {
        self -= element;
        self
    }
}

impl<T: Clone> Mul<isize> for Sequence<T> {
    type Output = Sequence<T>;

    #[track_caller]
    fn mul(mut self, times: isize) -> Sequence<T> {
        self *= times;
        self
    }
}

impl<T: PartialEq> Div<T> for Sequence<T> {
    type Output = Sequence<T>;

    fn div(mut self, element: T) -> Sequence<T> {
        self /= element;
        self
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Sequence, seq, seq::unit_vec};

    #[test]
    fn test_add_assign_element_and_sequence() {
        let mut v = seq![1];
        v += 2;
        v += &seq![3, 4];
        v += seq![5];
        assert_eq!(v, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_sub_div_assign() {
        let mut v = seq![1, 2, 1, 3, 1];
        v -= 1;
        assert_eq!(v, [2, 1, 3, 1]);
        v -= 9;
        assert_eq!(v, [2, 1, 3, 1]);
        v /= 1;
        assert_eq!(v, [2, 3]);
    }

    #[test]
    fn test_mul_assign() {
        let mut v = seq![1, 2];
        v *= 2;
        assert_eq!(v, [1, 2, 1, 2]);
        v *= 0;
        assert!(v.is_empty());
    }

    #[test]
    fn test_shift_assign_rotates() {
        let mut v = seq![1, 2, 3, 4];
        v <<= 1;
        assert_eq!(v, [2, 3, 4, 1]);
        v >>= 1;
        assert_eq!(v, [1, 2, 3, 4]);
        v >>= -1;
        assert_eq!(v, [2, 3, 4, 1]);
    }

    #[test]
    fn test_borrowed_operators_leave_receiver_untouched() {
        let v = seq![1, 2, 3, 2];
        let before = v.clone();

        assert_eq!(&v + 4, [1, 2, 3, 2, 4]);
        assert_eq!(&v + &seq![7, 8], [1, 2, 3, 2, 7, 8]);
        assert_eq!(&v - 2, [1, 3, 2]);
        assert_eq!(&v * 2, [1, 2, 3, 2, 1, 2, 3, 2]);
        assert_eq!(&v / 2, [1, 3]);

        assert_eq!(v, before);
    }

    #[test]
    fn test_mul_repeats_original_unmodified() {
        let v = seq![1, 2, 3];
        let w = &v * 2;
        assert_eq!(w, [1, 2, 3, 1, 2, 3]);
        assert_eq!(v, [1, 2, 3]);
        assert_ne!(w.as_slice().as_ptr(), v.as_slice().as_ptr());
    }

    #[test]
    fn test_owned_operators() {
        let v = seq![1, 2] + 3;
        let v = v + seq![4];
        let v = v + &seq![5];
        assert_eq!(v, [1, 2, 3, 4, 5]);
        let v = (v - 1) / 5;
        assert_eq!(v, [2, 3, 4]);
        assert_eq!(v * 2, [2, 3, 4, 2, 3, 4]);
    }

    #[test]
    fn test_operators_on_non_copy_elements() {
        use alloc::string::String;

        let v: Sequence<String> = seq![String::from("a")];
        let w = &v + String::from("b");
        assert_eq!(w, ["a", "b"]);
        assert_eq!(&w / String::from("a"), ["b"]);
    }

    #[test]
    #[should_panic(expected = "capacity exceeded")]
    fn test_add_assign_panics_at_max_size() {
        let mut v = Sequence::from(unit_vec(Sequence::<()>::MAX_SIZE));
        v += ();
    }

    #[test]
    #[should_panic(expected = "capacity exceeded")]
    fn test_add_sequences_past_max_size_panics() {
        let v = Sequence::from(unit_vec(Sequence::<()>::MAX_SIZE));
        let _ = &v + &seq![()];
    }

    #[test]
    #[should_panic(expected = "repeat count cannot be negative")]
    fn test_mul_negative_panics() {
        let v = seq![1];
        let _ = &v * -1;
    }

    #[test]
    #[should_panic(expected = "capacity exceeded")]
    fn test_mul_overflow_panics() {
        let mut v = seq![1, 2, 3];
        v *= isize::MAX;
    }
}
