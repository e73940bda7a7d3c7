//! Login page with email/password sign-in and account registration.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::RegisterRequest;
use crate::state::auth::AuthState;
use crate::util::auth::{sign_in, sign_up, validate_login, validate_registration};

/// Which form the page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginMode {
    #[default]
    SignIn,
    Register,
}

impl LoginMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::Register,
            Self::Register => Self::SignIn,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in to your account",
            Self::Register => "Create an account",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::SignIn => "Need an account? Register",
            Self::Register => "Already registered? Sign in",
        }
    }
}

/// Role choices offered at registration as `(wire value, label)`.
pub const ROLE_OPTIONS: [(&str, &str); 2] = [("recruiter", "Recruiter"), ("ar_requestor", "AR Requestor")];

/// Message shown after a successful registration.
pub const REGISTERED: &str = "Account created. Sign in to continue.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let mode = RwSignal::new(LoginMode::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let role = RwSignal::new(ROLE_OPTIONS[0].0.to_owned());
    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Signed-in visitors go straight to their dashboard.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_some() {
            navigate(state.dashboard_path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_sign_in = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if let Err(message) = validate_login(&email_value, &password_value) {
            error.set(Some(message));
            return;
        }
        busy.set(true);
        error.set(None);
        info.set(None);
        // On success the redirect effect above takes over.
        leptos::task::spawn_local(async move {
            let result = sign_in(email_value, password_value, auth).await;
            busy.set(false);
            if let Err(message) = result {
                error.set(Some(message));
            }
        });
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = RegisterRequest {
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
            full_name: full_name.get_untracked().trim().to_owned(),
            role: role.get_untracked(),
        };
        if let Err(message) =
            validate_registration(&request.full_name, &request.email, &request.password, &confirm.get_untracked())
        {
            error.set(Some(message));
            return;
        }
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            let result = sign_up(request).await;
            busy.set(false);
            match result {
                Ok(_) => {
                    password.set(String::new());
                    confirm.set(String::new());
                    mode.set(LoginMode::SignIn);
                    info.set(Some(REGISTERED.to_owned()));
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    let on_toggle = move |_| {
        mode.update(|m| *m = m.toggled());
        error.set(None);
        info.set(None);
    };

    let is_register = move || mode.get() == LoginMode::Register;

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"RecruitMatch"</h1>
                <p class="login-card__subtitle">{move || mode.get().heading()}</p>
                <Show
                    when=is_register
                    fallback=move || {
                        view! {
                            <form class="login-form" on:submit=on_sign_in>
                                <input
                                    class="login-input"
                                    type="email"
                                    placeholder="you@example.com"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="password"
                                    placeholder="Password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                                <button class="login-button" type="submit" disabled=move || busy.get()>
                                    {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="login-form" on:submit=on_register>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Full name"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Confirm password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                        <select
                            class="login-input"
                            prop:value=move || role.get()
                            on:change=move |ev| role.set(event_target_value(&ev))
                        >
                            {ROLE_OPTIONS
                                .iter()
                                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                .collect_view()}
                        </select>
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating account..." } else { "Register" }}
                        </button>
                    </form>
                </Show>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || info.get().is_some()>
                    <p class="login-message">{move || info.get().unwrap_or_default()}</p>
                </Show>
                <div class="login-divider"></div>
                <button class="login-link" type="button" on:click=on_toggle>
                    {move || mode.get().toggle_label()}
                </button>
            </div>
        </div>
    }
}
