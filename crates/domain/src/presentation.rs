//! Presentation table — how each device is drawn on the dashboard.
//!
//! A single static row per device holds both icons, both captions and the
//! room it belongs to. Every view in this module is a pure function of a
//! [`DeviceRegistry`] snapshot.

use serde::Serialize;

use crate::device::{
    AIR_CONDITIONER, CEILING_FAN, GARDEN_SPRINKLER, LIVING_ROOM_LIGHT, MAIN_DOOR_LOCK, WATER_PUMP,
};
use crate::registry::{DeviceEntry, DeviceRegistry};

/// Display grouping for device panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Room {
    LivingRoom,
    Bedroom,
    GardenArea,
}

impl Room {
    /// Rooms in display order (left to right).
    pub const ALL: [Self; 3] = [Self::LivingRoom, Self::Bedroom, Self::GardenArea];

    /// Heading shown above the room's panels.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::LivingRoom => "Living Room",
            Self::Bedroom => "Bedroom",
            Self::GardenArea => "Garden Area",
        }
    }

    /// Emoji prefix for the heading.
    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::LivingRoom => "💡",
            Self::Bedroom => "❄️",
            Self::GardenArea => "🌿",
        }
    }
}

/// Static rendering data for one device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    pub name: &'static str,
    pub room: Room,
    /// Short caption prefix, e.g. `"Light"` in `"Light: ON"`.
    pub caption: &'static str,
    pub on_icon: &'static str,
    pub off_icon: &'static str,
    pub on_label: &'static str,
    pub off_label: &'static str,
}

impl DeviceProfile {
    /// Icon URL for the given state.
    #[must_use]
    pub fn icon(&self, powered: bool) -> &'static str {
        if powered { self.on_icon } else { self.off_icon }
    }

    /// Human-readable state label for the given state.
    #[must_use]
    pub fn label(&self, powered: bool) -> &'static str {
        if powered { self.on_label } else { self.off_label }
    }
}

const ON: &str = "ON";
const OFF: &str = "OFF";

/// One row per catalog device.
pub static DEVICE_PROFILES: [DeviceProfile; 6] = [
    DeviceProfile {
        name: LIVING_ROOM_LIGHT,
        room: Room::LivingRoom,
        caption: "Light",
        on_icon: "https://img.icons8.com/fluency/96/light-on.png",
        off_icon: "https://img.icons8.com/fluency/96/light-off.png",
        on_label: ON,
        off_label: OFF,
    },
    DeviceProfile {
        name: CEILING_FAN,
        room: Room::LivingRoom,
        caption: "Fan",
        on_icon: "https://img.icons8.com/fluency/96/fan.png",
        off_icon: "https://img.icons8.com/color/96/no-fan.png",
        on_label: ON,
        off_label: OFF,
    },
    DeviceProfile {
        name: AIR_CONDITIONER,
        room: Room::Bedroom,
        caption: "AC",
        on_icon: "https://img.icons8.com/fluency/96/air-conditioner.png",
        off_icon: "https://img.icons8.com/color/96/air-conditioner-off.png",
        on_label: ON,
        off_label: OFF,
    },
    DeviceProfile {
        name: MAIN_DOOR_LOCK,
        room: Room::Bedroom,
        caption: "Door",
        on_icon: "https://img.icons8.com/fluency/96/door-opened.png",
        off_icon: "https://img.icons8.com/fluency/96/door-closed.png",
        on_label: "Unlocked",
        off_label: "Locked",
    },
    DeviceProfile {
        name: GARDEN_SPRINKLER,
        room: Room::GardenArea,
        caption: "Sprinkler",
        on_icon: "https://img.icons8.com/fluency/96/sprinkler.png",
        off_icon: "https://img.icons8.com/color/96/no-water.png",
        on_label: ON,
        off_label: OFF,
    },
    DeviceProfile {
        name: WATER_PUMP,
        room: Room::GardenArea,
        caption: "Water Pump",
        on_icon: "https://img.icons8.com/fluency/96/water-pump.png",
        off_icon: "https://img.icons8.com/color/96/no-pump.png",
        on_label: ON,
        off_label: OFF,
    },
];

/// Look up the presentation row for a device.
#[must_use]
pub fn profile(name: &str) -> Option<&'static DeviceProfile> {
    DEVICE_PROFILES.iter().find(|profile| profile.name == name)
}

/// A rendered device tile: icon plus caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevicePanel {
    pub name: &'static str,
    pub powered: bool,
    pub icon: &'static str,
    /// Full caption, e.g. `"Door: Locked"`.
    pub caption: String,
}

impl DevicePanel {
    /// Build the panel for one registry entry.
    ///
    /// Returns `None` only for names without a presentation row, which the
    /// catalog never produces.
    #[must_use]
    pub fn from_entry(entry: &DeviceEntry) -> Option<Self> {
        let profile = profile(entry.name)?;
        Some(Self {
            name: entry.name,
            powered: entry.powered,
            icon: profile.icon(entry.powered),
            caption: format!("{}: {}", profile.caption, profile.label(entry.powered)),
        })
    }
}

/// A room heading with its device tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomPanel {
    pub room: Room,
    pub title: &'static str,
    pub emoji: &'static str,
    pub panels: Vec<DevicePanel>,
}

/// One line of the status table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRow {
    pub device: &'static str,
    pub powered: bool,
    /// `"ON"` or `"OFF"`, for every device including the door.
    pub status: &'static str,
}

/// Group the registry into room panels, keeping registry order inside each room.
#[must_use]
pub fn room_panels(registry: &DeviceRegistry) -> Vec<RoomPanel> {
    Room::ALL
        .iter()
        .map(|&room| RoomPanel {
            room,
            title: room.title(),
            emoji: room.emoji(),
            panels: registry
                .entries()
                .iter()
                .filter(|entry| profile(entry.name).is_some_and(|p| p.room == room))
                .filter_map(DevicePanel::from_entry)
                .collect(),
        })
        .collect()
}

/// Build the two-column status table in registry order.
#[must_use]
pub fn status_rows(registry: &DeviceRegistry) -> Vec<StatusRow> {
    registry
        .entries()
        .iter()
        .map(|entry| StatusRow {
            device: entry.name,
            powered: entry.powered,
            status: if entry.powered { ON } else { OFF },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DEVICE_NAMES;

    fn panel(name: &str, powered: bool) -> DevicePanel {
        let mut registry = DeviceRegistry::new();
        registry.set(name, powered).unwrap();
        let entry = registry
            .entries()
            .iter()
            .find(|entry| entry.name == name)
            .copied()
            .unwrap();
        DevicePanel::from_entry(&entry).unwrap()
    }

    #[test]
    fn should_have_a_profile_for_every_catalog_device() {
        for name in DEVICE_NAMES {
            assert!(profile(name).is_some(), "missing profile for {name}");
        }
    }

    #[test]
    fn should_render_living_room_light() {
        let on = panel(LIVING_ROOM_LIGHT, true);
        assert_eq!(on.icon, "https://img.icons8.com/fluency/96/light-on.png");
        assert_eq!(on.caption, "Light: ON");
        let off = panel(LIVING_ROOM_LIGHT, false);
        assert_eq!(off.icon, "https://img.icons8.com/fluency/96/light-off.png");
        assert_eq!(off.caption, "Light: OFF");
    }

    #[test]
    fn should_render_ceiling_fan() {
        let on = panel(CEILING_FAN, true);
        assert_eq!(on.icon, "https://img.icons8.com/fluency/96/fan.png");
        assert_eq!(on.caption, "Fan: ON");
        let off = panel(CEILING_FAN, false);
        assert_eq!(off.icon, "https://img.icons8.com/color/96/no-fan.png");
        assert_eq!(off.caption, "Fan: OFF");
    }

    #[test]
    fn should_render_air_conditioner() {
        let on = panel(AIR_CONDITIONER, true);
        assert_eq!(
            on.icon,
            "https://img.icons8.com/fluency/96/air-conditioner.png"
        );
        assert_eq!(on.caption, "AC: ON");
        let off = panel(AIR_CONDITIONER, false);
        assert_eq!(
            off.icon,
            "https://img.icons8.com/color/96/air-conditioner-off.png"
        );
        assert_eq!(off.caption, "AC: OFF");
    }

    #[test]
    fn should_render_door_as_unlocked_or_locked() {
        let on = panel(MAIN_DOOR_LOCK, true);
        assert_eq!(on.icon, "https://img.icons8.com/fluency/96/door-opened.png");
        assert_eq!(on.caption, "Door: Unlocked");
        let off = panel(MAIN_DOOR_LOCK, false);
        assert_eq!(off.icon, "https://img.icons8.com/fluency/96/door-closed.png");
        assert_eq!(off.caption, "Door: Locked");
    }

    #[test]
    fn should_render_garden_sprinkler() {
        let on = panel(GARDEN_SPRINKLER, true);
        assert_eq!(on.icon, "https://img.icons8.com/fluency/96/sprinkler.png");
        assert_eq!(on.caption, "Sprinkler: ON");
        let off = panel(GARDEN_SPRINKLER, false);
        assert_eq!(off.icon, "https://img.icons8.com/color/96/no-water.png");
        assert_eq!(off.caption, "Sprinkler: OFF");
    }

    #[test]
    fn should_render_water_pump() {
        let on = panel(WATER_PUMP, true);
        assert_eq!(on.icon, "https://img.icons8.com/fluency/96/water-pump.png");
        assert_eq!(on.caption, "Water Pump: ON");
        let off = panel(WATER_PUMP, false);
        assert_eq!(off.icon, "https://img.icons8.com/color/96/no-pump.png");
        assert_eq!(off.caption, "Water Pump: OFF");
    }

    #[test]
    fn should_group_two_devices_per_room_in_registry_order() {
        let rooms = room_panels(&DeviceRegistry::new());
        let layout: Vec<(Room, Vec<&str>)> = rooms
            .iter()
            .map(|room| (room.room, room.panels.iter().map(|p| p.name).collect()))
            .collect();

        assert_eq!(
            layout,
            vec![
                (Room::LivingRoom, vec![LIVING_ROOM_LIGHT, CEILING_FAN]),
                (Room::Bedroom, vec![AIR_CONDITIONER, MAIN_DOOR_LOCK]),
                (Room::GardenArea, vec![GARDEN_SPRINKLER, WATER_PUMP]),
            ]
        );
    }

    #[test]
    fn should_build_status_table_matching_registry_entries() {
        let mut registry = DeviceRegistry::new();
        registry.set(MAIN_DOOR_LOCK, true).unwrap();

        let rows = status_rows(&registry);
        assert_eq!(rows.len(), 6);
        for (row, entry) in rows.iter().zip(registry.entries()) {
            assert_eq!(row.device, entry.name);
            assert_eq!(row.powered, entry.powered);
        }
        assert_eq!(rows[3].status, "ON");
        assert_eq!(rows[0].status, "OFF");
    }
}
