use serde::{Deserialize, Serialize};

use showroom_core::ValueObject;

/// Capability contract for anything in the showroom that can travel.
///
/// Exactly one required behavior and deliberately no default implementation:
/// every implementor supplies its own, wholly distinct message. There is
/// nothing concrete to instantiate here; the trait is only usable through
/// its implementors.
pub trait Vehicle {
    /// Describe one unit of travel.
    ///
    /// (Named `travel` because `move` is a Rust keyword.)
    fn travel(&self) -> String;
}

/// Road-bound variant.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car;

impl ValueObject for Car {}

impl Vehicle for Car {
    fn travel(&self) -> String {
        "Driving on the road!".to_string()
    }
}

/// Airborne variant.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plane;

impl ValueObject for Plane {}

impl Vehicle for Plane {
    fn travel(&self) -> String {
        "Flying in the sky!".to_string()
    }
}

/// Waterborne variant.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boat;

impl ValueObject for Boat {}

impl Vehicle for Boat {
    fn travel(&self) -> String {
        "Sailing on the water!".to_string()
    }
}

/// The demo fleet, in fixed order: car, plane, boat.
///
/// Heterogeneous on purpose: callers hold `dyn Vehicle` and each `travel`
/// call resolves to the element's runtime variant, never to a shared
/// default.
pub fn fleet() -> Vec<Box<dyn Vehicle>> {
    vec![Box::new(Car), Box::new(Plane), Box::new(Boat)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fleet_dispatches_to_each_variant_in_order() {
        let messages: Vec<String> = fleet().iter().map(|v| v.travel()).collect();
        assert_eq!(
            messages,
            vec![
                "Driving on the road!",
                "Flying in the sky!",
                "Sailing on the water!",
            ]
        );
    }

    #[test]
    fn variant_messages_are_distinct() {
        let messages: Vec<String> = fleet().iter().map(|v| v.travel()).collect();
        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
