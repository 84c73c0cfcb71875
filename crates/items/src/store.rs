use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use itemreg_core::{DomainError, DomainResult, Entity, ItemId};

use crate::item::{Item, NewItem, Page};

/// Item registry abstraction.
///
/// Implementations own both the id counter and the ordered collection; callers
/// only ever see clones of stored records.
pub trait ItemStore: Send + Sync {
    /// Assign the next id and append a new item at the end.
    fn create(&self, fields: NewItem) -> Item;

    /// Items inside `page`, in insertion order.
    fn list(&self, page: Page) -> Vec<Item>;

    fn get(&self, id: ItemId) -> DomainResult<Item>;

    /// Replace name and description of an existing item, keeping its position.
    fn update(&self, id: ItemId, fields: NewItem) -> DomainResult<Item>;

    /// Remove an item permanently and return the removed record.
    fn delete(&self, id: ItemId) -> DomainResult<Item>;

    /// Number of live items.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    fn create(&self, fields: NewItem) -> Item {
        (**self).create(fields)
    }

    fn list(&self, page: Page) -> Vec<Item> {
        (**self).list(page)
    }

    fn get(&self, id: ItemId) -> DomainResult<Item> {
        (**self).get(id)
    }

    fn update(&self, id: ItemId, fields: NewItem) -> DomainResult<Item> {
        (**self).update(id, fields)
    }

    fn delete(&self, id: ItemId) -> DomainResult<Item> {
        (**self).delete(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

#[derive(Debug)]
struct RegistryState {
    /// Last id handed out; `0` until the first create.
    last_id: ItemId,
    items: Vec<Item>,
}

impl RegistryState {
    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

/// In-memory registry: one counter and one `Vec` behind a single lock.
///
/// Lookups are linear scans in insertion order.
#[derive(Debug)]
pub struct InMemoryItemStore {
    inner: Mutex<RegistryState>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RegistryState {
                last_id: ItemId::new(0),
                items: Vec::new(),
            }),
        }
    }

    // Every operation finishes its mutation before anything that could panic,
    // so a poisoned guard still holds consistent state.
    fn state(&self) -> MutexGuard<'_, RegistryState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for InMemoryItemStore {
    fn create(&self, fields: NewItem) -> Item {
        let mut state = self.state();
        state.last_id = state.last_id.next();
        let item = Item::from_fields(state.last_id, fields);
        state.items.push(item.clone());
        item
    }

    fn list(&self, page: Page) -> Vec<Item> {
        let state = self.state();
        let window = page.window(state.items.len());
        state.items[window].to_vec()
    }

    fn get(&self, id: ItemId) -> DomainResult<Item> {
        let state = self.state();
        state
            .items
            .iter()
            .find(|item| item.id() == id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    fn update(&self, id: ItemId, fields: NewItem) -> DomainResult<Item> {
        let mut state = self.state();
        let index = state.position(id).ok_or(DomainError::NotFound)?;
        let updated = Item::from_fields(id, fields);
        state.items[index] = updated.clone();
        Ok(updated)
    }

    fn delete(&self, id: ItemId) -> DomainResult<Item> {
        let mut state = self.state();
        let index = state.position(id).ok_or(DomainError::NotFound)?;
        Ok(state.items.remove(index))
    }

    fn len(&self) -> usize {
        self.state().items.len()
    }
}
