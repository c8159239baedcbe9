//! # devices-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **REST JSON API** under `/v1/devices` for device CRUD and
//!   brand search, plus `/ping` and `/health` endpoints
//! - Map HTTP requests into application service calls (driving adapter),
//!   including the presence checks the core leaves to the transport
//! - Map application results into HTTP responses: absent results become
//!   `404`, rejected input `400`, storage failures `500`
//!
//! REST is the only transport. There is no GraphQL endpoint.
//!
//! ## Dependency rule
//! Depends on `devices-app` (for port traits and services) and `devices-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
