//! Device service — use-cases for managing devices.

use devices_domain::device::{Device, DevicePatch, NewDevice};
use devices_domain::error::DevicesError;
use devices_domain::id::DeviceId;
use devices_domain::time;

use crate::ports::DeviceRepository;

/// Application service for device CRUD and search.
///
/// Holds no state of its own besides the injected repository.
pub struct DeviceService<R> {
    repo: R,
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new device, assigning its identifier and creation time.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, request), fields(device_name = %request.name))]
    pub async fn add_device(&self, request: NewDevice) -> Result<DeviceId, DevicesError> {
        let device = request.into_device(DeviceId::generate(), time::now());
        let id = self.repo.save(device).await?;
        tracing::debug!(%id, "device added");
        Ok(id)
    }

    /// Look up a device by id. `Ok(None)` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(&self, id: &DeviceId) -> Result<Option<Device>, DevicesError> {
        self.repo.find_by_id(id).await
    }

    /// List all devices, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_all_devices(&self) -> Result<Vec<Device>, DevicesError> {
        self.repo.find_all().await
    }

    /// Overwrite a device's mutable fields, creating it if unknown.
    ///
    /// The caller decides which id to target; no re-validation happens here.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, device), fields(id = %device.id))]
    pub async fn replace_device(&self, device: Device) -> Result<Device, DevicesError> {
        self.repo.replace(device).await
    }

    /// Apply a partial update. `Ok(None)` when the device does not exist.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, patch), fields(id = %patch.id))]
    pub async fn patch_device(&self, patch: DevicePatch) -> Result<Option<DeviceId>, DevicesError> {
        self.repo.patch(patch).await
    }

    /// Delete a device by id. Deleting an unknown id succeeds.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_device(&self, id: &DeviceId) -> Result<(), DevicesError> {
        self.repo.delete(id).await
    }

    /// Find devices whose brand equals `query`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn search_devices(&self, query: &str) -> Result<Vec<Device>, DevicesError> {
        self.repo.search(query).await
    }
}
