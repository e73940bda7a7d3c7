//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome, guards, dialogs, and agent widgets while
//! reading shared state from Leptos context providers.

pub mod agent_monitoring;
pub mod catalog_notice;
pub mod layout;
pub mod progress_bar;
pub mod protected;
pub mod status_card;
pub mod upload_modal;
