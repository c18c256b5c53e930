//! Devices domain module.
//!
//! Business rules for the device showcase: a base identity type (`Device`)
//! composed into a stateful `Smartphone` whose battery is a guarded, bounded
//! resource. Pure deterministic domain logic (no IO, no storage); mutating
//! operations report what they did as [`DeviceEvent`]s and the caller decides
//! how to surface them.

pub mod device;

pub use device::{
    BatteryCharged, BatteryLevel, CallPlaced, Device, DeviceEvent, DeviceId, DeviceUsed,
    Smartphone,
};
