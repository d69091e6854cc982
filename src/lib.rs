// This file is part of pyseq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `pyseq`
//!
//! A growable, owning sequence type with **Python-list ergonomics**, built on
//! a contiguous `Vec<T>` and usable in `no_std` + `alloc` environments.
//!
//! The core type, [`Sequence<T>`], keeps the performance profile of `Vec`
//! (amortized `O(1)` append, `O(1)` random access, `O(n)` middle
//! insert/remove) and adds the index arithmetic and list operations people
//! reach for in Python:
//!
//! - negative indices (`seq[-1]`, `insert(-1, x)`, `remove(-2)`);
//! - stepped, possibly reversed slices that always copy
//!   ([`Sequence::slice`]);
//! - rotation, order-preserving dedup, stable sort, in-place filter;
//! - list arithmetic: `+`, `-`, `*`, `/` and their assigning forms, with
//!   `<<=` / `>>=` for rotation.
//!
//! ## Index model
//!
//! All user-facing indices are `isize`. Before any element is touched, an
//! index is checked against the range valid for that operation and a
//! negative value `i` is resolved to `i + len`. Element positions accept
//! `[-len, len)`; insertion points accept `[-len, len]`. See [`Sequence`] for
//! the full table.
//!
//! ## Errors and panics
//!
//! - Methods that validate arguments return [`Result`] with an [`Error`] and
//!   leave the sequence unchanged on failure.
//! - Operator forms and `seq[i]` cannot return a `Result`; they panic with
//!   the error's message instead, like slice indexing does.
//! - No sequence grows past [`Sequence::MAX_SIZE`]; size arithmetic is
//!   overflow-checked and reports [`Error::Full`]. Constructors (`From`,
//!   `FromIterator`, `seq![x; n]`) panic with the same message.
//! - The [`Extend`] impl is the exception to "unchanged on failure": it
//!   appends item by item and panics at `MAX_SIZE`, keeping what it already
//!   appended. Use [`Sequence::try_extend_from_iter`] for all-or-nothing.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `Sequence<T>` as a plain
//!     sequence of elements.
//!
//! ## Example
//!
//! ```rust
//! use pyseq::{Error, seq};
//!
//! let mut v = seq![1, 2, 3, 4, 5];
//! assert_eq!(v[-1], 5);
//! assert_eq!(v.slice(-1, -4, -1)?, [5, 4, 3]);
//!
//! v <<= 2;
//! assert_eq!(v, [3, 4, 5, 1, 2]);
//!
//! assert_eq!(v.remove(-1)?, 2);
//! assert_eq!(v.insert(9, 0), Err(Error::OutOfBounds { index: 9, start: -4, end: 5 }));
//! # Ok::<(), Error>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
mod macros;
mod ops;
#[cfg(feature = "serde")]
mod serde;
mod seq;

// Public exports (crate API surface)
pub use error::{Error, ErrorKind};
pub use iter::IntoIter;
pub use seq::Sequence;
