use std::sync::Arc;

use itemreg_items::{InMemoryItemStore, ItemStore};

/// Shared state injected into every handler through an `Extension`.
///
/// Built once at startup; the registry inside owns all item state for the
/// lifetime of the process.
#[derive(Clone)]
pub struct AppServices {
    items: Arc<dyn ItemStore>,
}

impl AppServices {
    pub fn new(items: Arc<dyn ItemStore>) -> Self {
        Self { items }
    }

    /// Services backed by a fresh, empty in-memory registry.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryItemStore::new()))
    }

    pub fn items(&self) -> &dyn ItemStore {
        self.items.as_ref()
    }
}

impl core::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppServices")
            .field("items", &self.items.len())
            .finish()
    }
}
