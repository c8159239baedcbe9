//! # devices-adapter-storage-memory
//!
//! Process-lifetime persistence adapter.
//!
//! ## Responsibilities
//! - Implement the `DeviceRepository` port defined in `devices-app::ports::storage`
//! - Keep all records in a single mutex-guarded map owned by the repository
//!   instance, so independent instances never share data
//! - Translate lock failures into the domain storage error
//!
//! ## Dependency rule
//! Depends on `devices-app` (for port traits) and `devices-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod device_repo;
pub mod error;

pub use device_repo::InMemoryDeviceRepository;
pub use error::StorageError;
