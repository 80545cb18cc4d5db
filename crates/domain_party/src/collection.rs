//! Keyed, insertion-ordered collections of insured items

use core_kernel::ItemKey;

use crate::assets::InsuredItem;
use crate::error::PartyError;

/// Insertion-ordered set of items with at most one item per key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCollection<T> {
    items: Vec<T>,
}

impl<T> Default for ItemCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: InsuredItem> ItemCollection<T> {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection, rejecting duplicate keys
    ///
    /// # Errors
    ///
    /// Returns [`PartyError::DuplicateKey`] on the first repeated key.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Result<Self, PartyError> {
        let mut collection = Self::new();
        for item in items {
            collection.push(item)?;
        }
        Ok(collection)
    }

    /// Appends an item, rejecting a key that is already present
    pub fn push(&mut self, item: T) -> Result<(), PartyError> {
        let key = item.item_key();
        if self.contains_key(key) {
            return Err(PartyError::duplicate_key(T::KIND, key));
        }
        self.items.push(item);
        Ok(())
    }

    /// Looks up an item by key
    pub fn get(&self, key: ItemKey) -> Option<&T> {
        self.items.iter().find(|item| item.item_key() == key)
    }

    /// Returns the item at the given insertion position
    pub fn get_at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn contains_key(&self, key: ItemKey) -> bool {
        self.get(key).is_some()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = ItemKey> + '_ {
        self.items.iter().map(|item| item.item_key())
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

impl<'a, T> IntoIterator for &'a ItemCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
