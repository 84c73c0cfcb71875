//! Strongly-typed identifiers used across the domain.

use core::num::IntErrorKind;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an item.
///
/// Assigned by the registry from a monotonically increasing counter; the first
/// issued value is `1` and values are never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// The identifier issued right after this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ItemId> for i64 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    /// An integer outside `i64` is well-formed but can never have been issued,
    /// so it parses to `NotFound` rather than `InvalidId`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = i64::from_str(s.trim()).map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => DomainError::NotFound,
            _ => DomainError::invalid_id(format!("ItemId: {e}")),
        })?;
        Ok(Self(value))
    }
}
