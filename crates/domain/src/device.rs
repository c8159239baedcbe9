//! Device — the single managed record type.

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;
use crate::time::Timestamp;

/// A stored device record.
///
/// `id` and `created_at` are fixed at creation; only `name` and
/// `device_brand` ever change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub device_brand: String,
    pub created_at: Timestamp,
}

impl Device {
    /// Whether this device's brand equals `query`, ignoring case.
    #[must_use]
    pub fn matches_brand(&self, query: &str) -> bool {
        self.device_brand.to_lowercase() == query.to_lowercase()
    }

    /// Overwrite every mutable field with the values from `replacement`.
    ///
    /// `id` and `created_at` of `self` are kept.
    pub fn replace_fields(&mut self, replacement: Device) {
        self.name = replacement.name;
        self.device_brand = replacement.device_brand;
    }
}

/// Client-supplied fields for a device that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDevice {
    pub name: String,
    pub device_brand: String,
}

impl NewDevice {
    #[must_use]
    pub fn new(name: impl Into<String>, device_brand: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            device_brand: device_brand.into(),
        }
    }

    /// Turn the request into a full record with the given identity.
    #[must_use]
    pub fn into_device(self, id: DeviceId, created_at: Timestamp) -> Device {
        Device {
            id,
            name: self.name,
            device_brand: self.device_brand,
            created_at,
        }
    }
}

/// Partial update of an existing device.
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevicePatch {
    pub id: DeviceId,
    pub name: Option<String>,
    pub device_brand: Option<String>,
}

impl DevicePatch {
    /// Start an empty patch targeting `id`.
    #[must_use]
    pub fn new(id: DeviceId) -> Self {
        Self {
            id,
            name: None,
            device_brand: None,
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn device_brand(mut self, device_brand: impl Into<String>) -> Self {
        self.device_brand = Some(device_brand.into());
        self
    }

    /// Merge the supplied fields into `device`.
    pub fn apply(self, device: &mut Device) {
        if let Some(name) = self.name {
            device.name = name;
        }
        if let Some(device_brand) = self.device_brand {
            device.device_brand = device_brand;
        }
    }
}
