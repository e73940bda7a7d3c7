//! Reload the shared catalog from the backend.
//!
//! ERROR HANDLING
//! ==============
//! Each collection loads independently; a failure keeps that collection's
//! previous contents and records the message on `CatalogState::error`.

use leptos::prelude::*;

use crate::state::catalog::CatalogState;

/// Reload jobs, consultants, and flat matching results.
pub fn refresh_catalog(catalog: RwSignal<CatalogState>) {
    catalog.update(|c| {
        c.loading = true;
        c.error = None;
    });
    leptos::task::spawn_local(async move {
        load_jobs(catalog).await;
        load_consultants(catalog).await;
        load_results(catalog).await;
        catalog.update(|c| c.loading = false);
    });
}

/// Reload only the job list, e.g. after an upload or delete.
pub fn refresh_jobs(catalog: RwSignal<CatalogState>) {
    leptos::task::spawn_local(load_jobs(catalog));
}

/// Reload only the consultant list.
pub fn refresh_consultants(catalog: RwSignal<CatalogState>) {
    leptos::task::spawn_local(load_consultants(catalog));
}

async fn load_jobs(catalog: RwSignal<CatalogState>) {
    match crate::net::api::list_jobs().await {
        Ok(jobs) => catalog.update(|c| c.jobs = jobs),
        Err(e) => record(catalog, "jobs", &e),
    }
}

async fn load_consultants(catalog: RwSignal<CatalogState>) {
    match crate::net::api::list_consultants().await {
        Ok(consultants) => catalog.update(|c| c.consultants = consultants),
        Err(e) => record(catalog, "consultants", &e),
    }
}

async fn load_results(catalog: RwSignal<CatalogState>) {
    match crate::net::api::fetch_matching_results().await {
        Ok(results) => catalog.update(|c| c.results = results),
        Err(e) => record(catalog, "matching results", &e),
    }
}

fn record(catalog: RwSignal<CatalogState>, what: &str, error: &crate::net::error::ApiError) {
    leptos::logging::warn!("failed to load {what}: {error}");
    let message = format!("Failed to load {what}: {error}");
    catalog.update(|c| c.error = Some(message));
}
