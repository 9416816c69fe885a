//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. A
/// validated price is a value object; a product, which keeps its identity while
/// its stock changes, is an [`Entity`](crate::Entity).
///
/// Implementors construct themselves only through a validating constructor, so
/// holding one is proof that its invariants hold.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
