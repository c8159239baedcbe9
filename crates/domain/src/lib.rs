//! # devices-domain
//!
//! Pure domain model for the devices CRUD service.
//!
//! ## Responsibilities
//! - Foundational types: typed device identifier, error conventions, timestamps
//! - Define the **Device** record and the request shapes that create or
//!   mutate it (new-device request, partial patch)
//! - Own the brand-matching rule used by search and the patch merge policy
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod device;
