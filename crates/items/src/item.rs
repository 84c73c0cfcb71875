use core::ops::Range;

use itemreg_core::{Entity, ItemId, ValueObject};

/// Default page size for [`Page`].
pub const DEFAULT_LIMIT: usize = 10;

/// The fields a client supplies when creating or replacing an item.
///
/// Update is a full replace: a `None` description clears any stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
}

impl NewItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl ValueObject for NewItem {}

/// A stored item record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    description: Option<String>,
}

impl Item {
    pub(crate) fn from_fields(id: ItemId, fields: NewItem) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

/// Offset/limit window over the registry's insertion order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Page {
    pub skip: usize,
    pub limit: usize,
}

impl Page {
    pub fn new(skip: usize, limit: usize) -> Self {
        Self { skip, limit }
    }

    /// Index range this page selects from a sequence of `len` elements.
    ///
    /// Always within `0..=len`; an offset past the end yields an empty range.
    pub fn window(&self, len: usize) -> Range<usize> {
        let start = self.skip.min(len);
        let end = self.skip.saturating_add(self.limit).min(len);
        start..end
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ValueObject for Page {}
