//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls and maps failures to `ApiError`; `types` defines
//! the wire schema.

pub mod api;
pub mod types;
