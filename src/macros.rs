// This file is part of pyseq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `seq!` literal macro.

/// Creates a [`Sequence`](crate::Sequence) from a list of elements, like `vec!`.
///
/// - `seq![]` is an empty sequence;
/// - `seq![a, b, c]` holds the given elements in order;
/// - `seq![x; n]` holds `n` clones of `x`.
///
/// # Examples
/// ```
/// use pyseq::{Sequence, seq};
///
/// let empty: Sequence<u8> = seq![];
/// assert!(empty.is_empty());
/// assert_eq!(seq![1, 2, 3], [1, 2, 3]);
/// assert_eq!(seq![0; 2], [0, 0]);
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Sequence::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::Sequence::from_elem($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Sequence::from([$($x),+])
    };
}
