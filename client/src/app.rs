//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected::{HomeRedirect, Protected};
use crate::net::config::API_BASE_META;
use crate::pages::{
    ar_dashboard::ArDashboardPage, consultant_profiles::ConsultantProfilesPage,
    job_descriptions::JobDescriptionsPage, login::LoginPage, matching_results::MatchingResultsPage,
    monitoring::MonitoringPage, recruiter_dashboard::RecruiterDashboardPage,
};
use crate::state::{auth::AuthState, catalog::CatalogState, matching::MatchingState};
use crate::util::auth::restore_session;
use crate::util::refresh::refresh_catalog;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_base` is published in a meta tag so the browser bundle can find the
/// backend without a rebuild.
pub fn shell(options: LeptosOptions, api_base: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth, catalog, and matching contexts, restores any
/// stored session, and loads the catalog whenever a different user signs in.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let catalog = RwSignal::new(CatalogState::default());
    let matching = RwSignal::new(MatchingState::default());

    provide_context(auth);
    provide_context(catalog);
    provide_context(matching);

    Effect::new(move || restore_session(auth));

    Effect::new(move |previous: Option<Option<i64>>| {
        let current = auth.with(|a| a.user.as_ref().map(|u| u.id));
        if current.is_some() && previous.flatten() != current {
            refresh_catalog(catalog);
        }
        if current.is_none() {
            catalog.set(CatalogState::default());
            matching.set(MatchingState::default());
        }
        current
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/recruitmatch.css"/>
        <Title text="RecruitMatch"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=HomeRedirect/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <Protected><ArDashboardPage/></Protected> }
                />
                <Route
                    path=StaticSegment("ar-dashboard")
                    view=|| view! { <Protected><ArDashboardPage/></Protected> }
                />
                <Route
                    path=StaticSegment("recruiter-dashboard")
                    view=|| view! { <Protected><RecruiterDashboardPage/></Protected> }
                />
                <Route
                    path=StaticSegment("job-descriptions")
                    view=|| view! { <Protected><JobDescriptionsPage/></Protected> }
                />
                <Route
                    path=StaticSegment("consultant-profiles")
                    view=|| view! { <Protected><ConsultantProfilesPage/></Protected> }
                />
                <Route
                    path=StaticSegment("matching-results")
                    view=|| view! { <Protected><MatchingResultsPage/></Protected> }
                />
                <Route
                    path=StaticSegment("monitoring")
                    view=|| view! { <Protected><MonitoringPage/></Protected> }
                />
            </Routes>
        </Router>
    }
}
