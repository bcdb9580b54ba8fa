// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{DataError, Slot};

/// Ordered, resizable sequence of lazily initialized elements.
///
/// A sequence is always owned by its parent (a batch or a resource group). Callers get it as a
/// `&Sequence<T>` or `&mut Sequence<T>` borrowed from that parent, so every mutation through the
/// reference is a mutation of the parent's storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence<T> {
    slots: Vec<Slot<T>>,
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Sequence { slots: Vec::new() }
    }
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// `DataError::IndexOutOfRange` when `index >= self.len()`.
    pub fn at(&self, index: usize) -> Result<&Slot<T>, DataError> {
        let len = self.slots.len();
        self.slots
            .get(index)
            .ok_or(DataError::IndexOutOfRange { index, len })
    }

    /// Mutable variant of [`Sequence::at`].
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Slot<T>, DataError> {
        let len = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(DataError::IndexOutOfRange { index, len })
    }

    /// Changes the length of the sequence to exactly `new_len`.
    ///
    /// Elements below `min(len, new_len)` are kept untouched, elements past `new_len` are dropped
    /// and new elements start [`Slot::Uninitialized`].
    pub fn resize(&mut self, new_len: usize) {
        self.slots.resize_with(new_len, Slot::default);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slot<T>> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Slot<T>> {
        self.slots.iter_mut()
    }

    /// Iterates over the initialized elements, skipping the uninitialized ones.
    pub fn initialized(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter_map(Slot::get)
    }

    pub fn initialized_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter_map(Slot::get_mut)
    }

    /// Keeps the initialized elements for which `predicate` returns true. Uninitialized elements
    /// are always removed.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        self.slots.retain_mut(|slot| match slot {
            Slot::Initialized(value) => predicate(value),
            Slot::Uninitialized => false,
        });
    }

    /// Moves every element to the end of `dest`, leaving `self` empty.
    pub fn move_and_append_to(&mut self, dest: &mut Sequence<T>) {
        dest.slots.append(&mut self.slots);
    }

    pub(crate) fn into_initialized(self) -> impl Iterator<Item = T> {
        self.slots.into_iter().filter_map(Slot::into_inner)
    }
}

impl<T: Default> Sequence<T> {
    /// Appends an initialized, empty element and returns it.
    pub fn append_empty(&mut self) -> &mut T {
        self.slots.push(Slot::Uninitialized);
        let last = self.slots.len() - 1;
        self.slots[last].init_empty()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            slots: iter.into_iter().map(Slot::Initialized).collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a Slot<T>;
    type IntoIter = std::slice::Iter<'a, Slot<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut Slot<T>;
    type IntoIter = std::slice::IterMut<'a, Slot<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_out_of_range() {
        let mut seq: Sequence<u32> = [1, 2].into_iter().collect();
        assert_eq!(
            seq.at(2).unwrap_err(),
            DataError::IndexOutOfRange { index: 2, len: 2 }
        );
        assert_eq!(
            seq.at_mut(7).unwrap_err().to_string(),
            "index 7 out of range for sequence of length 2"
        );
        assert_eq!(seq.at(1).unwrap().get(), Some(&2));
    }

    #[test]
    fn test_resize_grow_and_shrink() {
        let mut seq: Sequence<String> = ["a".to_string(), "b".to_string()].into_iter().collect();
        seq.resize(4);
        assert_eq!(seq.len(), 4);
        assert!(seq.at(2).unwrap().is_uninitialized());
        assert!(seq.at(3).unwrap().is_uninitialized());
        assert_eq!(seq.at(1).unwrap().get().map(String::as_str), Some("b"));

        seq.resize(1);
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.at(0).unwrap().get().map(String::as_str), Some("a"));

        seq.resize(0);
        assert!(seq.is_empty());
    }

    #[test]
    fn test_initialized_skips_sentinels() {
        let mut seq: Sequence<u32> = [1].into_iter().collect();
        seq.resize(3);
        *seq.at_mut(2).unwrap().init_empty() = 3;
        assert_eq!(seq.initialized().copied().collect::<Vec<_>>(), vec![1, 3]);
        for value in seq.initialized_mut() {
            *value *= 10;
        }
        assert_eq!(seq.initialized().copied().collect::<Vec<_>>(), vec![10, 30]);
    }

    #[test]
    fn test_append_empty() {
        let mut seq: Sequence<Vec<u8>> = Sequence::new();
        seq.append_empty().push(1);
        seq.append_empty();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.at(0).unwrap().get(), Some(&vec![1]));
        assert_eq!(seq.at(1).unwrap().get(), Some(&vec![]));
    }

    #[test]
    fn test_retain_drops_uninitialized() {
        let mut seq: Sequence<u32> = [1, 2, 3, 4].into_iter().collect();
        seq.resize(6);
        seq.retain(|v| *v % 2 == 0);
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.initialized().copied().collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn test_move_and_append_to() {
        let mut src: Sequence<u32> = [3, 4].into_iter().collect();
        let mut dest: Sequence<u32> = [1, 2].into_iter().collect();
        src.move_and_append_to(&mut dest);
        assert!(src.is_empty());
        assert_eq!(dest.initialized().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }
}
