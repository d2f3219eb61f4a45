//! In-memory menu store
//!
//! Items live in an `Arc<RwLock<Vec<MenuItem>>>`; cloning the store clones
//! the handle, so every request handler shares one sequence. The lock is
//! held for the full duration of each operation, which is the only
//! concurrency guarantee the service makes.

use std::sync::{Arc, RwLock};

use crate::core::error::StoreError;
use crate::core::menu::{MenuItem, MenuItemDraft, seed_items};

/// Thread-safe, in-memory collection of menu items.
///
/// Ids are assigned by the store as `max(existing ids) + 1`, so deleting an
/// item in the middle never causes a later create to collide with a
/// survivor. Insertion order is preserved and is the order `list` returns.
#[derive(Clone)]
pub struct MenuStore {
    items: Arc<RwLock<Vec<MenuItem>>>,
}

impl MenuStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store holding the fixed seed records, ids 1 through 8.
    pub fn seeded() -> Self {
        Self {
            items: Arc::new(RwLock::new(seed_items())),
        }
    }

    /// All items, in insertion order.
    pub fn list(&self) -> Result<Vec<MenuItem>, StoreError> {
        let items = self.items.read().map_err(StoreError::poisoned)?;

        Ok(items.clone())
    }

    /// The item with the given id.
    pub fn get(&self, id: u64) -> Result<MenuItem, StoreError> {
        let items = self.items.read().map_err(StoreError::poisoned)?;

        items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Append a new item built from the draft, assigning the next free id.
    pub fn create(&self, draft: MenuItemDraft) -> Result<MenuItem, StoreError> {
        let mut items = self.items.write().map_err(StoreError::poisoned)?;

        let id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        let item = draft.into_item(id);
        items.push(item.clone());

        Ok(item)
    }

    /// Replace every client-writable field of the item with the given id.
    /// The id itself and the item's position in the sequence are preserved.
    pub fn update(&self, id: u64, draft: MenuItemDraft) -> Result<MenuItem, StoreError> {
        let mut items = self.items.write().map_err(StoreError::poisoned)?;

        let slot = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;

        *slot = draft.into_item(id);

        Ok(slot.clone())
    }

    /// Remove the item with the given id.
    pub fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut items = self.items.write().map_err(StoreError::poisoned)?;

        let position = items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;

        items.remove(position);

        Ok(())
    }
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new()
    }
}
