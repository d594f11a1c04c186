//! Async client for the stillage inventory service REST API.
//!
//! The service tracks containers (barrels, vats), the products stored in
//! them, and the supporting reference data (container types, product
//! types, measurement units, users/roles) plus an append-only history
//! log per container. This crate is a thin, typed pass-through:
//!
//! - **[`ApiClient`]** — one accessor method per (resource, verb) pair,
//!   JSON in/out, no business logic.
//! - **[`SessionStore`]** — explicit holder for the bearer token; written
//!   at login/logout, cleared by the client on any 401, read by every
//!   outgoing request.
//! - **[`TransportConfig`]** — TLS verification and optional timeout for
//!   the underlying `reqwest` client.
//! - **[`types`]** — strict wire DTOs, one per resource, with the
//!   backend's inconsistent field casing resolved via serde aliases at
//!   this boundary.
//!
//! The client performs no retries and no request cancellation; a request
//! that never resolves leaves the caller waiting.

pub mod client;
pub mod error;
pub mod session;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use error::Error;
pub use session::SessionStore;
pub use transport::{TlsMode, TransportConfig};
