//! Networking modules for the recruiting backend's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `config` resolves the backend base URL,
//! `error` is the shared failure type, and `types` defines the wire schema.

pub mod api;
pub mod config;
pub mod error;
pub mod types;
