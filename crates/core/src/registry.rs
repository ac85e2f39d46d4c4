//! Ordered membership bookkeeping shared by tab lists, tabs and panels.
//!
//! Registration order is the order members are rendered in, so the position
//! of a member in its registry is its index.

use crate::model::{InstanceKey, PanelEntry, TabEntry};

pub trait Keyed {
    fn key(&self) -> InstanceKey;
}

impl Keyed for TabEntry {
    fn key(&self) -> InstanceKey {
        self.key
    }
}

impl Keyed for PanelEntry {
    fn key(&self) -> InstanceKey {
        self.key
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Registry<T> {
    items: Vec<T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a member. Duplicates are not filtered out.
    pub fn register(&mut self, item: T) {
        log::debug!("register {} at {}", item.key(), self.items.len());
        self.items.push(item);
    }

    /// Removes every occurrence of `key`, returning the index of the first
    /// one. `None` when the key was never registered.
    pub fn unregister(&mut self, key: InstanceKey) -> Option<usize> {
        let index = self.index_of(key)?;
        self.items.retain(|item| item.key() != key);
        log::debug!("unregister {} from {}", key, index);
        Some(index)
    }

    pub fn index_of(&self, key: InstanceKey) -> Option<usize> {
        self.items.iter().position(|item| item.key() == key)
    }

    pub fn find(&self, key: InstanceKey) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    pub fn contains(&self, key: InstanceKey) -> bool {
        self.index_of(key).is_some()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab() -> TabEntry {
        let key = InstanceKey::new();
        TabEntry {
            key,
            element_id: format!("tab-{}", key),
            model: None,
        }
    }

    #[test]
    fn test_register_keeps_insertion_order() {
        let mut registry = Registry::new();
        let (a, b, c) = (tab(), tab(), tab());
        registry.register(a.clone());
        registry.register(b.clone());
        registry.register(c.clone());

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.index_of(a.key), Some(0));
        assert_eq!(registry.index_of(b.key), Some(1));
        assert_eq!(registry.index_of(c.key), Some(2));
    }

    #[test]
    fn test_unregister_shifts_followers() {
        let mut registry = Registry::new();
        let (a, b, c) = (tab(), tab(), tab());
        registry.register(a.clone());
        registry.register(b.clone());
        registry.register(c.clone());

        assert_eq!(registry.unregister(b.key), Some(1));
        assert_eq!(registry.index_of(c.key), Some(1));
        assert!(!registry.contains(b.key));
    }

    #[test]
    fn test_unregister_unknown_is_noop() {
        let mut registry = Registry::new();
        registry.register(tab());
        assert_eq!(registry.unregister(InstanceKey::new()), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicates_are_kept_and_removed_together() {
        let mut registry = Registry::new();
        let a = tab();
        registry.register(a.clone());
        registry.register(tab());
        registry.register(a.clone());
        assert_eq!(registry.len(), 3);

        assert_eq!(registry.unregister(a.key), Some(0));
        assert_eq!(registry.len(), 1);
    }
}
