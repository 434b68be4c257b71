//! Networking: typed wire schemas and the REST client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the backend's response/request shapes, `error` the
//! failure taxonomy, and `api` the bearer-authenticated HTTP boundary.

pub mod api;
pub mod error;
pub mod types;
