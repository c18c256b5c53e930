//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity is tracked by identity: two entities with the same id are the
/// same entity regardless of their current attribute values.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
