//! In-memory implementation of [`DeviceRepository`].

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use devices_app::ports::DeviceRepository;
use devices_domain::device::{Device, DevicePatch};
use devices_domain::error::DevicesError;
use devices_domain::id::DeviceId;

use crate::error::StorageError;

/// Device repository holding records in a mutex-guarded [`HashMap`].
///
/// Every operation takes the lock once, computes its result, and releases
/// the lock before the returned future is polled, so the guard never crosses
/// an `.await`.
#[derive(Debug, Default)]
pub struct InMemoryDeviceRepository {
    devices: Mutex<HashMap<DeviceId, Device>>,
}

impl InMemoryDeviceRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_devices<T>(
        &self,
        f: impl FnOnce(&mut HashMap<DeviceId, Device>) -> T,
    ) -> Result<T, DevicesError> {
        let mut devices = self.devices.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(f(&mut devices))
    }
}

impl DeviceRepository for InMemoryDeviceRepository {
    fn save(&self, device: Device) -> impl Future<Output = Result<DeviceId, DevicesError>> + Send {
        let result = self.with_devices(|devices| {
            let id = device.id.clone();
            tracing::trace!(%id, "saving device");
            devices.insert(id.clone(), device);
            id
        });
        async move { result }
    }

    fn find_by_id(
        &self,
        id: &DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, DevicesError>> + Send {
        let result = self.with_devices(|devices| devices.get(id).cloned());
        async move { result }
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Device>, DevicesError>> + Send {
        let result = self.with_devices(|devices| devices.values().cloned().collect());
        async move { result }
    }

    fn replace(&self, device: Device) -> impl Future<Output = Result<Device, DevicesError>> + Send {
        let result = self.with_devices(|devices| {
            if let Some(existing) = devices.get_mut(&device.id) {
                existing.replace_fields(device);
                existing.clone()
            } else {
                tracing::debug!(id = %device.id, "replace target missing, inserting");
                devices.insert(device.id.clone(), device.clone());
                device
            }
        });
        async move { result }
    }

    fn patch(
        &self,
        patch: DevicePatch,
    ) -> impl Future<Output = Result<Option<DeviceId>, DevicesError>> + Send {
        let result = self.with_devices(|devices| {
            let Some(existing) = devices.get_mut(&patch.id) else {
                tracing::debug!(id = %patch.id, "patch target missing");
                return None;
            };
            let id = existing.id.clone();
            patch.apply(existing);
            Some(id)
        });
        async move { result }
    }

    fn delete(&self, id: &DeviceId) -> impl Future<Output = Result<(), DevicesError>> + Send {
        let result = self.with_devices(|devices| {
            if devices.remove(id).is_none() {
                tracing::trace!(%id, "delete target missing");
            }
        });
        async move { result }
    }

    fn search(&self, query: &str) -> impl Future<Output = Result<Vec<Device>, DevicesError>> + Send {
        let result = self.with_devices(|devices| {
            devices
                .values()
                .filter(|device| device.matches_brand(query))
                .cloned()
                .collect()
        });
        async move { result }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use devices_domain::device::NewDevice;
    use devices_domain::time;

    use super::*;

    fn device(id: &str, name: &str, brand: &str) -> Device {
        NewDevice::new(name, brand).into_device(DeviceId::from(id), time::now())
    }

    #[tokio::test]
    async fn should_save_and_find_by_id() {
        let repo = InMemoryDeviceRepository::new();
        let dev = device("a", "Test Device", "Test Brand");

        let id = repo.save(dev.clone()).await.unwrap();
        assert_eq!(id.as_str(), "a");

        let found = repo.find_by_id(&id).await.unwrap();
        assert_eq!(found, Some(dev));
    }

    #[tokio::test]
    async fn should_overwrite_on_save_with_same_id() {
        let repo = InMemoryDeviceRepository::new();
        repo.save(device("a", "first", "b")).await.unwrap();
        repo.save(device("a", "second", "b")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "second");
    }

    #[tokio::test]
    async fn should_return_none_for_unknown_id() {
        let repo = InMemoryDeviceRepository::new();
        let found = repo.find_by_id(&DeviceId::from("123")).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn should_return_empty_vec_when_store_empty() {
        let repo = InMemoryDeviceRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_keep_created_at_when_replacing_existing() {
        let repo = InMemoryDeviceRepository::new();
        let original = device("a", "test_1", "brand_1");
        repo.save(original.clone()).await.unwrap();

        let mut replacement = device("a", "test_3", "brand_3");
        replacement.created_at = original.created_at + chrono::Duration::days(1);
        let stored = repo.replace(replacement).await.unwrap();

        assert_eq!(stored.id, original.id);
        assert_eq!(stored.created_at, original.created_at);
        assert_eq!(stored.name, "test_3");
        assert_eq!(stored.device_brand, "brand_3");
        assert_eq!(repo.find_by_id(&original.id).await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn should_insert_when_replacing_unknown_id() {
        let repo = InMemoryDeviceRepository::new();
        let dev = device("fresh", "n", "b");

        let stored = repo.replace(dev.clone()).await.unwrap();

        assert_eq!(stored, dev);
        assert_eq!(repo.find_all().await.unwrap(), vec![dev]);
    }

    #[tokio::test]
    async fn should_patch_present_fields_only() {
        let repo = InMemoryDeviceRepository::new();
        let original = device("a", "test_1", "brand_1");
        repo.save(original.clone()).await.unwrap();

        let patched = repo
            .patch(DevicePatch::new(original.id.clone()).name("test_3"))
            .await
            .unwrap();
        assert_eq!(patched, Some(original.id.clone()));

        let found = repo.find_by_id(&original.id).await.unwrap().unwrap();
        assert_eq!(found.name, "test_3");
        assert_eq!(found.device_brand, "brand_1");
        assert_eq!(found.created_at, original.created_at);
    }

    #[tokio::test]
    async fn should_leave_store_unchanged_when_patching_unknown_id() {
        let repo = InMemoryDeviceRepository::new();
        let original = device("a", "test_1", "brand_1");
        repo.save(original.clone()).await.unwrap();

        let patched = repo
            .patch(
                DevicePatch::new(DeviceId::from("invalid_id"))
                    .name("x")
                    .device_brand("y"),
            )
            .await
            .unwrap();

        assert!(patched.is_none());
        assert_eq!(repo.find_all().await.unwrap(), vec![original]);
    }

    #[tokio::test]
    async fn should_delete_idempotently() {
        let repo = InMemoryDeviceRepository::new();
        let id = repo.save(device("a", "n", "b")).await.unwrap();

        repo.delete(&id).await.unwrap();
        repo.delete(&id).await.unwrap();

        assert!(repo.find_by_id(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_search_brand_case_insensitively() {
        let repo = InMemoryDeviceRepository::new();
        repo.save(device("a", "one", "Acme")).await.unwrap();
        repo.save(device("b", "two", "ACME")).await.unwrap();
        repo.save(device("c", "three", "Acme Pro")).await.unwrap();

        let mut lower: Vec<String> = repo
            .search("acme")
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id.into_inner())
            .collect();
        let mut upper: Vec<String> = repo
            .search("ACME")
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id.into_inner())
            .collect();
        lower.sort();
        upper.sort();

        assert_eq!(lower, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(lower, upper);
        assert!(repo.search("brand_3").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_not_share_state_between_instances() {
        let first = InMemoryDeviceRepository::new();
        let second = InMemoryDeviceRepository::new();
        first.save(device("a", "n", "b")).await.unwrap();

        assert!(second.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_share_state_through_arc() {
        let repo = Arc::new(InMemoryDeviceRepository::new());
        let handle = Arc::clone(&repo);
        handle.save(device("a", "n", "b")).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn should_apply_concurrent_saves_and_patches() {
        const N: usize = 64;
        let repo = Arc::new(InMemoryDeviceRepository::new());

        let saves: Vec<_> = (0..N)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    repo.save(device(&format!("dev-{i}"), "original", "b"))
                        .await
                        .unwrap()
                })
            })
            .collect();
        for save in saves {
            save.await.unwrap();
        }

        let patches: Vec<_> = (0..N)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    let patch = DevicePatch::new(DeviceId::from(format!("dev-{i}")))
                        .name(format!("patched-{i}"));
                    repo.patch(patch).await.unwrap()
                })
            })
            .collect();
        for patch in patches {
            assert!(patch.await.unwrap().is_some());
        }

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), N);
        for dev in all {
            let suffix = dev.id.as_str().trim_start_matches("dev-");
            assert_eq!(dev.name, format!("patched-{suffix}"));
            assert_eq!(dev.device_brand, "b");
        }
    }

    #[tokio::test]
    async fn should_report_storage_error_when_lock_poisoned() {
        let repo = Arc::new(InMemoryDeviceRepository::new());
        let poisoner = Arc::clone(&repo);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.devices.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        let result = repo.find_all().await;
        assert!(matches!(result, Err(DevicesError::Storage(_))));
    }
}
