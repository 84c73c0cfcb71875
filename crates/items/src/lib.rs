//! Item registry domain module.
//!
//! This crate owns the `Item` record and the in-memory registry that assigns
//! ids and keeps items in insertion order (no IO, no HTTP).

pub mod item;
pub mod store;

pub use item::{DEFAULT_LIMIT, Item, NewItem, Page};
pub use store::{InMemoryItemStore, ItemStore};
