//! Consultant profile browser with local filters and backend search.

#[cfg(test)]
#[path = "consultant_profiles_test.rs"]
mod consultant_profiles_test;

use leptos::prelude::*;

use crate::components::catalog_notice::CatalogErrorNotice;
use crate::components::upload_modal::{UploadModal, UploadTarget};
use crate::net::api;
use crate::net::types::ConsultantProfile;
use crate::state::catalog::{CatalogState, ExperienceBand, filter_consultants};
use crate::util::format::{availability_class, bio_or_default, initials, overflow_label, skill_preview};
use crate::util::refresh::refresh_consultants;

const SKILL_PREVIEW: usize = 4;

/// Rating text; profiles without one show `N/A`.
pub fn rating_label(rating: Option<f64>) -> String {
    rating.map_or_else(|| "N/A".to_owned(), |r| format!("{r:.1}"))
}

#[component]
pub fn ConsultantProfilesPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();

    let term = RwSignal::new(String::new());
    let band = RwSignal::new(ExperienceBand::All);
    // Backend search results replace the catalog list until cleared.
    let searched = RwSignal::new(None::<Vec<ConsultantProfile>>);
    let searching = RwSignal::new(false);
    let search_error = RwSignal::new(None::<String>);
    let viewing = RwSignal::new(None::<ConsultantProfile>);
    let show_upload = RwSignal::new(false);

    let visible = move || {
        let band = band.get();
        term.with(|term| match searched.get() {
            Some(found) => filter_consultants(&found, term, band).into_iter().cloned().collect::<Vec<_>>(),
            None => catalog.with(|c| filter_consultants(&c.consultants, term, band).into_iter().cloned().collect()),
        })
    };

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = term.get_untracked().trim().to_owned();
        if query.is_empty() || searching.get_untracked() {
            return;
        }
        searching.set(true);
        search_error.set(None);
        leptos::task::spawn_local(async move {
            let result = api::search_consultants(&query).await;
            searching.set(false);
            match result {
                Ok(found) => {
                    // Local term filtering would hide semantic matches.
                    term.set(String::new());
                    searched.set(Some(found));
                }
                Err(e) => {
                    leptos::logging::warn!("consultant search failed: {e}");
                    search_error.set(Some(format!("Search failed: {e}")));
                }
            }
        });
    };

    let on_clear = move |_| {
        searched.set(None);
        search_error.set(None);
        term.set(String::new());
    };

    let on_uploaded = Callback::new(move |()| refresh_consultants(catalog));
    let on_close_upload = Callback::new(move |()| show_upload.set(false));

    view! {
        <div class="page consultant-profiles">
            <header class="page__header">
                <div>
                    <h1>"Consultant Profiles"</h1>
                    <p class="page__subtitle">"Browse and manage consultant profiles"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| show_upload.set(true)>
                    "Upload Profile"
                </button>
            </header>

            <form class="filters" on:submit=on_search>
                <input
                    class="filters__search"
                    type="text"
                    placeholder="Search by name or skills..."
                    prop:value=move || term.get()
                    on:input=move |ev| term.set(event_target_value(&ev))
                />
                <select
                    class="filters__select"
                    prop:value=move || band.get().as_str()
                    on:change=move |ev| band.set(ExperienceBand::parse(&event_target_value(&ev)))
                >
                    {ExperienceBand::ALL
                        .iter()
                        .map(|b| view! { <option value=b.as_str()>{b.label()}</option> })
                        .collect_view()}
                </select>
                <button class="btn" type="submit" disabled=move || searching.get()>
                    {move || if searching.get() { "Searching..." } else { "Search" }}
                </button>
                <Show when=move || searched.with(Option::is_some)>
                    <button class="btn btn--ghost" type="button" on:click=on_clear>
                        "Clear search"
                    </button>
                </Show>
            </form>

            <Show when=move || search_error.get().is_some()>
                <p class="notice notice--error">{move || search_error.get().unwrap_or_default()}</p>
            </Show>
            <CatalogErrorNotice/>

            <div class="card-grid">
                <For
                    each=visible
                    key=|c| c.id
                    children=move |consultant: ConsultantProfile| {
                        let (shown, hidden) = skill_preview(&consultant.skills, SKILL_PREVIEW);
                        let chips = shown
                            .iter()
                            .map(|s| view! { <span class="chip">{s.clone()}</span> })
                            .collect_view();
                        let more = overflow_label(hidden).map(|l| view! { <span class="chips__more">{l}</span> });
                        let bio = bio_or_default(consultant.bio.as_deref()).to_owned();
                        let selected = consultant.clone();
                        view! {
                            <article class="consultant-card">
                                <div class="consultant-card__header">
                                    <span class="avatar">{initials(&consultant.name)}</span>
                                    <div>
                                        <h3 class="consultant-card__name">{consultant.name.clone()}</h3>
                                        <p class="consultant-card__meta">
                                            {format!("{} years experience", consultant.experience)}
                                        </p>
                                    </div>
                                    <span class="consultant-card__rating">{rating_label(consultant.rating)}</span>
                                </div>
                                <h4>"Skills"</h4>
                                <div class="chips">{chips}{more}</div>
                                <p class="consultant-card__bio">{bio}</p>
                                <div class="consultant-card__footer">
                                    <span class=availability_class(&consultant.availability)>
                                        {consultant.availability.clone()}
                                    </span>
                                    <button
                                        class="btn btn--ghost"
                                        on:click=move |_| viewing.set(Some(selected.clone()))
                                    >
                                        "View Profile"
                                    </button>
                                </div>
                            </article>
                        }
                    }
                />
            </div>

            {move || viewing.get().map(|c| view! {
                <ConsultantDetailDialog consultant=c on_close=Callback::new(move |()| viewing.set(None))/>
            })}

            <Show when=move || show_upload.get()>
                <UploadModal
                    target=UploadTarget::ConsultantProfile
                    on_close=on_close_upload
                    on_uploaded=on_uploaded
                />
            </Show>
        </div>
    }
}

#[component]
fn ConsultantDetailDialog(consultant: ConsultantProfile, on_close: Callback<()>) -> impl IntoView {
    let skills = consultant
        .skills
        .iter()
        .map(|s| view! { <span class="chip chip--lg">{s.clone()}</span> })
        .collect_view();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <span class="avatar avatar--lg">{initials(&consultant.name)}</span>
                    <div>
                        <h2>{consultant.name.clone()}</h2>
                        <p class="dialog__hint">{consultant.email.clone()}</p>
                    </div>
                    <button class="dialog__close" on:click=move |_| on_close.run(()) title="Close">"x"</button>
                </div>
                <h3>"About"</h3>
                <p class="dialog__body">{bio_or_default(consultant.bio.as_deref()).to_owned()}</p>
                <h3>"Skills"</h3>
                <div class="chips">{skills}</div>
                <div class="dialog__facts">
                    <div>
                        <h4>"Experience"</h4>
                        <p>{format!("{} years", consultant.experience)}</p>
                    </div>
                    <div>
                        <h4>"Availability"</h4>
                        <span class=availability_class(&consultant.availability)>{consultant.availability.clone()}</span>
                    </div>
                    <div>
                        <h4>"Rating"</h4>
                        <p>{rating_label(consultant.rating)}</p>
                    </div>
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
