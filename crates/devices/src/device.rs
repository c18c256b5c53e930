use serde::{Deserialize, Serialize};

use showroom_core::{Entity, EntityId, ValueObject};

/// Device identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(pub EntityId);

impl DeviceId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for DeviceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Battery charge percentage.
///
/// Invariant: the wrapped value is always in `[0, 100]` inclusive. The only
/// way to build one from raw input is [`BatteryLevel::clamped`], so the
/// invariant cannot be violated from outside.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatteryLevel(u8);

impl BatteryLevel {
    /// Empty battery.
    pub const MIN: BatteryLevel = BatteryLevel(0);
    /// Full battery.
    pub const MAX: BatteryLevel = BatteryLevel(100);

    /// Clamp a raw reading into `[0, 100]`.
    ///
    /// Out-of-range input is a normal, silently corrected case - not an
    /// error. Every battery write funnels through here.
    pub fn clamped(raw: i64) -> Self {
        Self(raw.clamp(0, 100) as u8)
    }

    pub fn percent(&self) -> u8 {
        self.0
    }
}

impl ValueObject for BatteryLevel {}

impl core::fmt::Display for BatteryLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Base identity shared by showcased devices.
///
/// Both fields are stored verbatim (no validation) and never change after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    brand: String,
    model: String,
}

impl Device {
    pub fn new(brand: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Space-joined `"{brand} {model}"` display string.
    pub fn info(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

/// A smartphone: device identity plus fixed storage and a guarded battery.
///
/// Composes [`Device`] rather than extending it - none of the base behavior
/// is overridden, the smartphone only adds state on top. The battery is the
/// one regulated variable: every mutation path routes through
/// `set_battery`, so no sequence of calls can leave it outside `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Smartphone {
    id: DeviceId,
    device: Device,
    storage_gb: u32,
    battery: BatteryLevel,
}

impl Smartphone {
    /// Construct a smartphone.
    ///
    /// `battery` is a raw reading and may be anything; it is routed through
    /// the clamping write path, so construction itself cannot violate the
    /// battery invariant.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        storage_gb: u32,
        battery: i64,
    ) -> Self {
        let mut phone = Self {
            id: DeviceId::new(EntityId::new()),
            device: Device::new(brand, model),
            storage_gb,
            battery: BatteryLevel::MIN,
        };
        phone.set_battery(battery);
        phone
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn storage_gb(&self) -> u32 {
        self.storage_gb
    }

    pub fn battery(&self) -> BatteryLevel {
        self.battery
    }

    /// Space-joined `"{brand} {model}"` display string.
    pub fn info(&self) -> String {
        self.device.info()
    }

    /// The single invariant-enforcing choke point for the battery.
    fn set_battery(&mut self, raw: i64) {
        let level = BatteryLevel::clamped(raw);
        if i64::from(level.percent()) != raw {
            tracing::trace!(raw, corrected = level.percent(), "battery write clamped");
        }
        self.battery = level;
    }

    /// Place a call. Reporting only; does not touch state.
    pub fn call(&self, number: impl Into<String>) -> DeviceEvent {
        DeviceEvent::CallPlaced(CallPlaced {
            number: number.into(),
            device: self.info(),
        })
    }

    /// Add `amount` percentage points to the battery and report the new
    /// level. Negative amounts discharge; the result is clamped either way.
    /// `amount` may be any integer, so the addition saturates rather than
    /// overflowing; saturation then clamp yields the same level as exact
    /// arithmetic would.
    pub fn charge(&mut self, amount: i64) -> DeviceEvent {
        self.set_battery(i64::from(self.battery.percent()).saturating_add(amount));
        DeviceEvent::BatteryCharged(BatteryCharged {
            battery: self.battery,
        })
    }

    /// Use the phone for `minutes`, draining 1% per full 5 minutes with a
    /// floor of 1% per use.
    ///
    /// The floor applies to zero and negative `minutes` too; that is the
    /// documented drain model, not unvalidated input to reject.
    pub fn use_for(&mut self, minutes: i64) -> DeviceEvent {
        let drain = minutes.div_euclid(5).max(1);
        self.set_battery(i64::from(self.battery.percent()) - drain);
        DeviceEvent::DeviceUsed(DeviceUsed {
            minutes,
            battery: self.battery,
        })
    }
}

impl Entity for Smartphone {
    type Id = DeviceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Smartphone {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} | {}GB | Battery: {}",
            self.info(),
            self.storage_gb,
            self.battery
        )
    }
}

/// Event: CallPlaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallPlaced {
    pub number: String,
    pub device: String,
}

/// Event: BatteryCharged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryCharged {
    pub battery: BatteryLevel,
}

/// Event: DeviceUsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceUsed {
    pub minutes: i64,
    pub battery: BatteryLevel,
}

/// What a device operation did.
///
/// Domain code performs no IO; each mutating (or reporting) operation hands
/// one of these back and the caller renders it, typically via `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceEvent {
    CallPlaced(CallPlaced),
    BatteryCharged(BatteryCharged),
    DeviceUsed(DeviceUsed),
}

impl DeviceEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            DeviceEvent::CallPlaced(_) => "device.call.placed",
            DeviceEvent::BatteryCharged(_) => "device.battery.charged",
            DeviceEvent::DeviceUsed(_) => "device.used",
        }
    }
}

impl core::fmt::Display for DeviceEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DeviceEvent::CallPlaced(e) => {
                write!(f, "Calling {} from {}...", e.number, e.device)
            }
            DeviceEvent::BatteryCharged(e) => write!(f, "Battery now {}", e.battery),
            DeviceEvent::DeviceUsed(e) => {
                write!(f, "Used for {} min, battery {}", e.minutes, e.battery)
            }
        }
    }
}
