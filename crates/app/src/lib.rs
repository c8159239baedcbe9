//! # devices-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement:
//!   - `DeviceRepository` — keyed CRUD plus brand search for devices
//! - Define the **driving/inbound** use-case struct:
//!   - `DeviceService` — add, get, list, replace, patch, delete, search
//! - Decide identifier and timestamp policy without knowing *how*
//!   persistence works
//!
//! ## Dependency rule
//! Depends on `devices-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
