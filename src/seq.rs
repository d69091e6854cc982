// This file is part of pyseq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Sequence` type and its inherent API.
//!
//! `Sequence<T>` is an owning, ordered, growable container over a contiguous
//! `Vec<T>`. The inherent API is split by concern into the files under
//! `seq/`; this file holds the type itself, its size and view accessors, and
//! the comparison, formatting and borrowing trait impls.

mod access;
mod extend;
mod from;
mod insert;
mod new;
mod query;
mod remove;
mod repeat;
mod retain;
mod rotate;
mod slice;
mod sort;
mod uniquify;

// Crate imports
use crate::iter::IntoIter;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    iter::Rev,
    ops::{Deref, DerefMut},
};

// Alloc imports
use alloc::vec::Vec;

/// An ordered, growable sequence with Python-list ergonomics.
///
/// `Sequence<T>` owns its elements exclusively and stores them contiguously.
/// On top of the usual `Vec`-like surface it adds:
///
/// - **negative indices**: `seq[-1]` is the last element; every method that
///   takes an `isize` index resolves it against the current length first;
/// - **stepped slices**: [`slice`](Sequence::slice) with a positive or
///   negative step, always producing an independent copy;
/// - **list arithmetic**: `+`, `-`, `*`, `/` and their `*=` forms, plus
///   `<<=` / `>>=` for rotation;
/// - **order-preserving algorithms**: [`uniquify`](Sequence::uniquify),
///   stable [`sort`](Sequence::sort), [`filter_in_place`](Sequence::filter_in_place).
///
/// # Index domains
///
/// With `n = len()`:
///
/// | kind | absolute | user-facing |
/// |---|---|---|
/// | element (`at`, `remove`, `seq[i]`) | `[0, n)` | `[-n, n)` |
/// | insertion point (`insert`) | `[0, n]` | `[-n, n]` |
/// | slice start | `[0, n)` | `[-n, n)` |
/// | slice stop | `[-1, n]` | `[-n - 1, n]` |
/// | erase bounds | `[0, n]` | not accepted |
///
/// Anything outside yields [`Error::OutOfBounds`](crate::Error::OutOfBounds).
///
/// # Fallible methods vs operators
///
/// Methods that validate their arguments return `Result` and leave the
/// sequence untouched on error. The operator forms (`+=`, `*`, `seq[i]`, …)
/// cannot return a `Result` and panic with the same error message instead.
///
/// # Examples
///
/// ```rust
/// use pyseq::{Sequence, seq};
///
/// let mut s = seq![3, 1, 2, 1, 3];
/// s.uniquify().sort();
/// assert_eq!(s, [1, 2, 3]);
///
/// s += 4;
/// assert_eq!(s[-1], 4);
/// assert_eq!(s.slice(-1, -5, -2).unwrap(), [4, 2]);
///
/// let twice = &s * 2;
/// assert_eq!(twice.len(), 8);
/// assert_eq!(s.len(), 4);
/// ```
#[derive(Clone)]
pub struct Sequence<T> {
    pub(crate) buf: Vec<T>,
}

impl<T> Sequence<T> {
    /// The largest length a sequence may reach.
    ///
    /// Every position of a sequence this long is still addressable by an
    /// `isize` user-facing index.
    pub const MAX_SIZE: usize = isize::MAX as usize;

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the number of elements the backing store can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.buf.get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.buf.get_mut(i)
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.buf.first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.buf.last()
    }

    /// Returns the elements as a shared slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    /// Unwraps the backing `Vec` without copying.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.buf
    }

    // iterators
    /// Front-to-back iterator over shared references.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.buf.iter()
    }

    /// Front-to-back iterator over mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.buf.iter_mut()
    }

    /// Back-to-front iterator over shared references.
    #[inline]
    pub fn iter_rev(&self) -> Rev<core::slice::Iter<'_, T>> {
        self.buf.iter().rev()
    }

    /// Removes all elements. Capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Returns an owning iterator over the current contents **and clears `self`**.
    ///
    /// The backing allocation moves into the iterator; `self` is left empty
    /// with no capacity.
    #[inline]
    pub fn drain_all(&mut self) -> IntoIter<T> {
        IntoIter {
            inner: core::mem::take(&mut self.buf).into_iter(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("len", &self.len())
            .field("elements", &self.as_slice())
            .finish()
    }
}

/// Renders `[a, b, c]` using each element's `Display`.
impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.buf.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str("]")
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for Sequence<T> {}
impl<T: Ord> Ord for Sequence<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for Sequence<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

// Comparisons against plain slices and arrays
impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Sequence<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}
impl<T: PartialEq<U>, U> PartialEq<[U]> for Sequence<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq<U>, U> PartialEq<&[U]> for Sequence<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}
impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for Sequence<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for Sequence<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for Sequence<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for Sequence<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for Sequence<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Builds a `Vec<()>` of length `len` without visiting each element.
///
/// `extend_from_within` copies `Copy` elements in bulk, which for a
/// zero-sized type is a length update. Lets tests reach `MAX_SIZE`.
#[cfg(test)]
pub(crate) fn unit_vec(len: usize) -> Vec<()> {
    let mut buf = Vec::new();
    if len > 0 {
        buf.push(());
    }
    while buf.len() < len {
        let grow = buf.len().min(len - buf.len());
        buf.extend_from_within(..grow);
    }
    buf
}
