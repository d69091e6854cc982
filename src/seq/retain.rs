// This file is part of pyseq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::seq::Sequence;

impl<T> Sequence<T> {
    /// Applies `action` to every element, front to back, in place.
    #[inline]
    pub fn for_each<F: FnMut(&mut T)>(&mut self, action: F) -> &mut Self {
        self.buf.iter_mut().for_each(action);
        self
    }

    /// Retains only the elements for which `predicate` returns `true`, preserving order.
    ///
    /// The predicate is applied to each element exactly once, in order.
    #[inline]
    pub fn filter_in_place<F: FnMut(&T) -> bool>(&mut self, predicate: F) -> &mut Self {
        self.buf.retain(predicate);
        self
    }
}
