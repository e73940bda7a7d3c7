//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! downloads) from page and component logic to improve reuse and testability.

pub mod auth;
pub mod download;
pub mod files;
pub mod format;
pub mod poll;
pub mod refresh;
pub mod session;
