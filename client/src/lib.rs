//! # client
//!
//! Leptos + WASM frontend for the RecruitMatch recruiting console.
//!
//! This crate contains the routed pages, shared components, application
//! state, and the REST client for the matching backend. The `hydrate`
//! feature builds the browser bundle; `ssr` builds the pieces the Axum host
//! renders on the server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    leptos::mount::hydrate_body(app::App);
}
