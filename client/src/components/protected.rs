//! Route guards: sign-in requirement, role checks, and the `/` redirect.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::layout::Layout;
use crate::state::auth::AuthState;
use crate::util::auth::{install_unauth_redirect, role_redirect};

/// Render `children` inside the app chrome once a user is signed in.
///
/// Shows "Loading..." while the stored session is checked, sends anonymous
/// visitors to `/login`, and moves users off dashboards reserved for the
/// other role.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());

    Effect::new(move || {
        let path = location.pathname.get();
        let state = auth.get();
        if let Some(target) = state.role().and_then(|role| role_redirect(&path, role)) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let ready = move || {
        let state = auth.get();
        !state.loading && state.user.is_some()
    };
    let loading = move || {
        auth.get().loading.then(|| {
            view! { <div class="loading-screen">"Loading..."</div> }
        })
    };

    view! {
        <Show when=ready fallback=loading>
            {
                let children = children.clone();
                view! { <Layout>{children()}</Layout> }
            }
        </Show>
    }
}

/// `/`: forward to the signed-in user's dashboard.
#[component]
pub fn HomeRedirect() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_some() {
            navigate(state.dashboard_path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! { <div class="loading-screen">"Loading..."</div> }
}
