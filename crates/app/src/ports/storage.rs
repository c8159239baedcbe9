//! Storage port — repository trait for device persistence.

use std::future::Future;
use std::sync::Arc;

use devices_domain::device::{Device, DevicePatch};
use devices_domain::error::DevicesError;
use devices_domain::id::DeviceId;

/// Keyed storage of [`Device`] records.
///
/// "Not found" is never an error: point lookups return `Ok(None)` and scans
/// return an empty `Vec`. Result ordering of scans is unspecified.
pub trait DeviceRepository {
    /// Insert or overwrite the record keyed by `device.id`.
    fn save(&self, device: Device) -> impl Future<Output = Result<DeviceId, DevicesError>> + Send;

    /// Look up a single device.
    fn find_by_id(
        &self,
        id: &DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, DevicesError>> + Send;

    /// Return every stored device.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Device>, DevicesError>> + Send;

    /// Overwrite the mutable fields of the record keyed by `device.id`.
    ///
    /// When no such record exists the device is inserted as given. When it
    /// does, its stored `created_at` is kept. Returns the stored record.
    fn replace(&self, device: Device)
    -> impl Future<Output = Result<Device, DevicesError>> + Send;

    /// Merge the fields present in `patch` into the existing record.
    ///
    /// Returns `Ok(None)` and leaves the store untouched when `patch.id` is
    /// unknown.
    fn patch(
        &self,
        patch: DevicePatch,
    ) -> impl Future<Output = Result<Option<DeviceId>, DevicesError>> + Send;

    /// Remove a device. Removing an unknown id succeeds.
    fn delete(&self, id: &DeviceId) -> impl Future<Output = Result<(), DevicesError>> + Send;

    /// Return every device whose brand equals `query`, ignoring case.
    fn search(&self, query: &str) -> impl Future<Output = Result<Vec<Device>, DevicesError>> + Send;
}

impl<T: DeviceRepository + Send + Sync> DeviceRepository for Arc<T> {
    fn save(&self, device: Device) -> impl Future<Output = Result<DeviceId, DevicesError>> + Send {
        (**self).save(device)
    }

    fn find_by_id(
        &self,
        id: &DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, DevicesError>> + Send {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Device>, DevicesError>> + Send {
        (**self).find_all()
    }

    fn replace(&self, device: Device)
    -> impl Future<Output = Result<Device, DevicesError>> + Send {
        (**self).replace(device)
    }

    fn patch(
        &self,
        patch: DevicePatch,
    ) -> impl Future<Output = Result<Option<DeviceId>, DevicesError>> + Send {
        (**self).patch(patch)
    }

    fn delete(&self, id: &DeviceId) -> impl Future<Output = Result<(), DevicesError>> + Send {
        (**self).delete(id)
    }

    fn search(&self, query: &str) -> impl Future<Output = Result<Vec<Device>, DevicesError>> + Send {
        (**self).search(query)
    }
}
