//! Vehicles domain module.
//!
//! Polymorphism showcase: one capability trait with a single required
//! behavior, three stateless variants, and uniform dispatch over a mixed
//! fleet. No shared state, no default behavior.

pub mod vehicle;

pub use vehicle::{Boat, Car, Plane, Vehicle, fleet};
