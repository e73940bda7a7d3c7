//! Application chrome: header, navigation, and the signed-in user's controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected page. Reads `AuthState` from context for the user
//! name and role-specific brand link; logout goes through `util::auth`.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::util::auth::sign_out;
use crate::util::format::initials;

/// Navigation entries as `(label, href)`. "Dashboard" is resolved per role.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Job Descriptions", "/job-descriptions"),
    ("Consultant Profiles", "/consultant-profiles"),
    ("Matching Results", "/matching-results"),
    ("Monitoring", "/monitoring"),
];

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let dashboard_href = move || auth.get().dashboard_path();
    let user_name = move || auth.get().display_name().unwrap_or_else(|| "User".to_owned());
    let role_label = move || auth.get().role().map(|r| role_display(r.as_str())).unwrap_or_default();
    let on_logout = move |_| sign_out(auth, &navigate);

    view! {
        <div class="app-shell">
            <header class="app-header">
                <a class="app-header__brand" href=dashboard_href>"RecruitMatch"</a>
                <nav class="app-nav">
                    <a
                        class=move || dashboard_link_class(&location.pathname.get(), dashboard_href())
                        href=dashboard_href
                    >
                        "Dashboard"
                    </a>
                    {NAV_LINKS
                        .iter()
                        .map(|(label, href)| {
                            let href = *href;
                            view! {
                                <a class=move || nav_link_class(&location.pathname.get(), href) href=href>
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <span class="app-header__spacer"></span>
                <span class="app-header__user">
                    <span class="avatar avatar--sm">{move || initials(&user_name())}</span>
                    <span class="app-header__name">{user_name}</span>
                    <span class="app-header__role">{role_label}</span>
                </span>
                <button class="btn app-header__logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <main class="app-main">{children()}</main>
        </div>
    }
}

/// Link class, marking the entry for the current path (or a sub-path) active.
pub fn nav_link_class(current: &str, href: &str) -> &'static str {
    let active = current == href || current.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'));
    if active { "app-nav__link app-nav__link--active" } else { "app-nav__link" }
}

/// Class for the "Dashboard" link. The AR dashboard is also served at `/dashboard`.
pub fn dashboard_link_class(current: &str, href: &str) -> &'static str {
    if href == "/ar-dashboard" && current == "/dashboard" {
        return nav_link_class(href, href);
    }
    nav_link_class(current, href)
}

/// Header label for a wire role name.
pub fn role_display(role: &str) -> String {
    match role {
        "ar_requestor" => "AR Requestor".to_owned(),
        "recruiter" => "Recruiter".to_owned(),
        other => other.replace('_', " "),
    }
}
