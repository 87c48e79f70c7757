//! Device catalog — the fixed set of simulated devices.
//!
//! The order of [`DEVICE_NAMES`] is significant: it drives the order of the
//! dashboard controls, the status table, and the telemetry fields.

/// Ceiling light in the living room.
pub const LIVING_ROOM_LIGHT: &str = "Living Room Light";
/// Ceiling fan in the living room.
pub const CEILING_FAN: &str = "Ceiling Fan";
/// Bedroom air conditioner.
pub const AIR_CONDITIONER: &str = "Air Conditioner";
/// Front door lock. Powered means unlocked.
pub const MAIN_DOOR_LOCK: &str = "Main Door Lock";
/// Garden sprinkler.
pub const GARDEN_SPRINKLER: &str = "Garden Sprinkler";
/// Garden water pump.
pub const WATER_PUMP: &str = "Water Pump";

/// Every registered device, in registration order.
pub const DEVICE_NAMES: [&str; 6] = [
    LIVING_ROOM_LIGHT,
    CEILING_FAN,
    AIR_CONDITIONER,
    MAIN_DOOR_LOCK,
    GARDEN_SPRINKLER,
    WATER_PUMP,
];

/// Resolve a caller-supplied name to its catalog constant.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static str> {
    DEVICE_NAMES.iter().copied().find(|known| *known == name)
}
