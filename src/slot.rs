//! A mutable cell holding an optional value.
//!
//! [`Maybe`] is an immutable value. When an optional value needs to be
//! swapped in place (a one-element cache, a lazily filled field), keep it in a
//! [`Slot`] instead. The slot exposes only the in-place operations; read the
//! current content with [`Slot::get`] or move it out with [`Slot::into_inner`].
//!
//! ```rust
//! use pullseq::{Maybe, Slot};
//!
//! let mut slot = Slot::new(Maybe::Some(2));
//! assert_eq!(slot.take(), Maybe::Some(2));
//! assert_eq!(slot.get(), Maybe::None);
//!
//! assert_eq!(*slot.get_or_insert(7), 7);
//! assert_eq!(slot.replace(9), Maybe::Some(7));
//! assert_eq!(slot.into_inner(), Maybe::Some(9));
//! ```

use crate::Maybe;

/// A mutable optional slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slot<T> {
    value: Maybe<T>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Slot<T> {
    /// Create a slot holding `value`.
    pub const fn new(value: Maybe<T>) -> Self {
        Self { value }
    }

    /// Create an empty slot.
    pub const fn empty() -> Self {
        Self { value: Maybe::None }
    }

    /// Returns `true` if the slot holds a value.
    pub const fn is_filled(&self) -> bool {
        self.value.is_some()
    }

    /// Borrow the current content.
    pub const fn as_ref(&self) -> Maybe<&T> {
        self.value.as_ref()
    }

    /// Mutably borrow the current payload, if any.
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self.value {
            Maybe::Some(ref mut x) => Maybe::Some(x),
            Maybe::None => Maybe::None,
        }
    }

    /// A copy of the current content.
    pub fn get(&self) -> Maybe<T>
    where
        T: Clone,
    {
        self.value.clone()
    }

    /// Move the content out, leaving the slot empty.
    pub fn take(&mut self) -> Maybe<T> {
        std::mem::take(&mut self.value)
    }

    /// Store `value`, returning the previous content.
    pub fn replace(&mut self, value: T) -> Maybe<T> {
        std::mem::replace(&mut self.value, Maybe::Some(value))
    }

    /// Store `value`, dropping any previous content, and return a reference
    /// to the stored value.
    pub fn insert(&mut self, value: T) -> &mut T {
        self.value = Maybe::Some(value);
        match self.value {
            Maybe::Some(ref mut x) => x,
            Maybe::None => unreachable!("slot was just filled"),
        }
    }

    /// Store `value` only if the slot is empty, then return a reference to
    /// the content.
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    /// Store `f()` only if the slot is empty, then return a reference to the
    /// content. `f` is not called when the slot is filled.
    pub fn get_or_insert_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.value.is_none() {
            self.value = Maybe::Some(f());
        }
        match self.value {
            Maybe::Some(ref mut x) => x,
            Maybe::None => unreachable!("slot was just filled"),
        }
    }

    /// Consume the slot, returning its content.
    pub fn into_inner(self) -> Maybe<T> {
        self.value
    }
}

impl<T> From<Maybe<T>> for Slot<T> {
    fn from(value: Maybe<T>) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_leaves_slot_empty() {
        let mut slot = Slot::new(Maybe::Some("a"));
        assert_eq!(slot.take(), Maybe::Some("a"));
        assert_eq!(slot.take(), Maybe::None);
        assert!(!slot.is_filled());
    }

    #[test]
    fn test_replace_returns_previous() {
        let mut slot = Slot::empty();
        assert_eq!(slot.replace(1), Maybe::None);
        assert_eq!(slot.replace(2), Maybe::Some(1));
        assert_eq!(slot.get(), Maybe::Some(2));
    }

    #[test]
    fn test_insert_overwrites() {
        let mut slot = Slot::new(Maybe::Some(1));
        *slot.insert(5) += 1;
        assert_eq!(slot.into_inner(), Maybe::Some(6));
    }

    #[test]
    fn test_get_or_insert_keeps_existing() {
        let mut slot = Slot::new(Maybe::Some(3));
        assert_eq!(*slot.get_or_insert(10), 3);

        let mut calls = 0;
        let mut empty: Slot<i32> = Slot::default();
        assert_eq!(
            *empty.get_or_insert_with(|| {
                calls += 1;
                4
            }),
            4
        );
        assert_eq!(*empty.get_or_insert_with(|| unreachable!()), 4);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_as_mut_edits_payload_in_place() {
        let mut slot = Slot::new(Maybe::Some(vec![1]));
        if let Maybe::Some(v) = slot.as_mut() {
            v.push(2);
        }
        assert_eq!(slot.as_ref(), Maybe::Some(&vec![1, 2]));
    }
}
