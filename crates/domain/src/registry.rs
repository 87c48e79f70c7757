//! Device registry — the per-session source of truth for device power state.
//!
//! The registry is an ordered list of `(name, powered)` pairs. The set of
//! names is fixed at construction to the six entries of
//! [`DEVICE_NAMES`](crate::device::DEVICE_NAMES); nothing is ever added or
//! removed afterwards, only overwritten.

use serde::Serialize;

use crate::device::{self, DEVICE_NAMES};
use crate::error::{HomeSimError, NotFoundError};

/// One registry row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceEntry {
    pub name: &'static str,
    pub powered: bool,
}

/// Ordered mapping from device name to its powered flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeviceRegistry {
    entries: Vec<DeviceEntry>,
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceRegistry {
    /// Create the six catalog entries, all powered off.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: DEVICE_NAMES
                .iter()
                .map(|&name| DeviceEntry {
                    name,
                    powered: false,
                })
                .collect(),
        }
    }

    /// Read the powered flag of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::NotFound`] if `name` is not a registered device.
    pub fn get(&self, name: &str) -> Result<bool, HomeSimError> {
        self.entry(name).map(|entry| entry.powered)
    }

    /// Copy of the full row for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::NotFound`] if `name` is not a registered device.
    pub fn entry(&self, name: &str) -> Result<DeviceEntry, HomeSimError> {
        self.position(name).map(|idx| self.entries[idx])
    }

    /// Overwrite the powered flag of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::NotFound`] if `name` is not a registered
    /// device. The registry is left unchanged in that case.
    pub fn set(&mut self, name: &str, powered: bool) -> Result<(), HomeSimError> {
        let idx = self.position(name)?;
        self.entries[idx].powered = powered;
        Ok(())
    }

    /// Snapshot of every entry, in registration order.
    #[must_use]
    pub fn entries(&self) -> &[DeviceEntry] {
        &self.entries
    }

    /// Number of devices currently powered.
    #[must_use]
    pub fn powered_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.powered).count()
    }

    fn position(&self, name: &str) -> Result<usize, HomeSimError> {
        device::lookup(name)
            .and_then(|known| self.entries.iter().position(|entry| entry.name == known))
            .ok_or_else(|| {
                NotFoundError {
                    entity: "Device",
                    id: name.to_string(),
                }
                .into()
            })
    }
}
