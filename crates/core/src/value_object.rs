//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: two instances holding the same values are
/// interchangeable. In this crate family the item field set submitted by
/// clients and the pagination window are value objects, while `Item` itself is
/// an [`Entity`](crate::Entity) keyed by its `ItemId`.
///
/// Value objects are immutable once built; to "modify" one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
