//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own - they are defined entirely
/// by their attribute values, and two with the same values are equal. They
/// are immutable: to "change" one, construct a new value.
///
/// Contrast with [`crate::Entity`], where identity persists across state
/// changes. `BatteryLevel { percent: 80 }` is a value object; a smartphone
/// holding that level is an entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
