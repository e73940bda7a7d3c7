//! Inline notice for a failed catalog load.

use leptos::prelude::*;

use crate::state::catalog::CatalogState;

/// Shows the last catalog load error, if any, as an error notice.
#[component]
pub fn CatalogErrorNotice() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let error = move || catalog.with(|c| c.error.clone());

    move || error().map(|message| view! { <p class="notice notice--error">{message}</p> })
}
