//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `catalog`, `matching`, etc.) so pages
//! depend on small focused models. App-wide models are provided as
//! `RwSignal` contexts by `app::App`; page-scoped ones (`results`,
//! `monitoring`) are created by the page that owns them.

pub mod auth;
pub mod catalog;
pub mod matching;
pub mod monitoring;
pub mod results;
