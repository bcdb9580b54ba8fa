// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

/// State of a single element of a [`Sequence`](crate::Sequence).
///
/// Growing a sequence leaves the new elements `Uninitialized`. Such an element has no fields to
/// read or write: it has to be turned into an `Initialized` one first, with
/// [`Slot::init_empty`] or [`Slot::get_or_init`]. An uninitialized element is different from an
/// initialized element that happens to be empty.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<T> {
    Uninitialized,
    Initialized(T),
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::Uninitialized
    }
}

impl<T> Slot<T> {
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, Slot::Uninitialized)
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Slot::Initialized(value) => Some(value),
            Slot::Uninitialized => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Slot::Initialized(value) => Some(value),
            Slot::Uninitialized => None,
        }
    }

    /// Leaves the slot uninitialized and returns its previous payload, if any.
    pub fn take(&mut self) -> Option<T> {
        match std::mem::take(self) {
            Slot::Initialized(value) => Some(value),
            Slot::Uninitialized => None,
        }
    }

    pub fn into_inner(self) -> Option<T> {
        match self {
            Slot::Initialized(value) => Some(value),
            Slot::Uninitialized => None,
        }
    }
}

impl<T: Default> Slot<T> {
    /// Resets the slot to an initialized, empty element and returns it. Any previous content is
    /// discarded.
    pub fn init_empty(&mut self) -> &mut T {
        *self = Slot::Initialized(T::default());
        let Slot::Initialized(value) = self else {
            unreachable!()
        };
        value
    }

    /// Returns the element, initializing it to an empty one first if needed.
    pub fn get_or_init(&mut self) -> &mut T {
        if self.is_uninitialized() {
            return self.init_empty();
        }
        let Slot::Initialized(value) = self else {
            unreachable!()
        };
        value
    }
}

impl<T> From<T> for Slot<T> {
    fn from(value: T) -> Self {
        Slot::Initialized(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninitialized_is_not_readable() {
        let mut slot: Slot<String> = Slot::default();
        assert!(slot.is_uninitialized());
        assert_eq!(slot.get(), None);
        assert_eq!(slot.get_mut(), None);
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_init_empty_discards_content() {
        let mut slot = Slot::from("content".to_string());
        assert_eq!(slot.get().map(String::as_str), Some("content"));

        slot.init_empty().push_str("fresh");
        assert_eq!(slot, Slot::Initialized("fresh".to_string()));
    }

    #[test]
    fn test_get_or_init_keeps_content() {
        let mut slot = Slot::from(vec![1]);
        slot.get_or_init().push(2);
        assert_eq!(slot.get(), Some(&vec![1, 2]));

        let mut empty: Slot<Vec<i32>> = Slot::Uninitialized;
        assert!(empty.get_or_init().is_empty());
        assert!(!empty.is_uninitialized());
    }

    #[test]
    fn test_take_leaves_slot_uninitialized() {
        let mut slot = Slot::from(5);
        assert_eq!(slot.take(), Some(5));
        assert!(slot.is_uninitialized());
    }
}
