//! Shared auth helpers: redirect decisions, the role guard, and session flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same unauthenticated redirect and role
//! checks, and the login page and header share the sign-in/sign-out flows.
//! The decision functions are pure so they can be tested without a browser.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::auth::AuthState;

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// `true` once auth has loaded and nobody is signed in.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Where a user with `role` must be sent instead of `path`, if anywhere.
///
/// AR pages are reserved for AR requestors and recruiter pages for
/// recruiters; everything else is open to any signed-in user.
pub fn role_redirect(path: &str, role: &Role) -> Option<&'static str> {
    let reserved_for = if path.starts_with("/ar-dashboard") {
        Role::ArRequestor
    } else if path.starts_with("/recruiter-dashboard") {
        Role::Recruiter
    } else {
        return None;
    };
    (*role != reserved_for).then(|| role.dashboard_path())
}

/// Validate the login form before hitting the backend.
///
/// # Errors
///
/// Returns the message to show when either field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Enter your email and password.".to_owned());
    }
    Ok(())
}

/// Validate the registration form.
///
/// # Errors
///
/// Returns the first problem found, in field order.
pub fn validate_registration(full_name: &str, email: &str, password: &str, confirm: &str) -> Result<(), String> {
    if full_name.trim().is_empty() {
        return Err("Enter your full name.".to_owned());
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.".to_owned());
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters.".to_owned());
    }
    if password != confirm {
        return Err("Passwords do not match.".to_owned());
    }
    Ok(())
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Resolve a stored token into a user on startup.
///
/// Without a token this only clears the loading flag; a token the backend
/// rejects is discarded.
pub fn restore_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        if crate::util::session::load_token().is_none() {
            auth.set(AuthState::default());
            return;
        }
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_current_user().await {
                Ok(user) => auth.set(AuthState { user: Some(user), loading: false }),
                Err(e) => {
                    leptos::logging::warn!("session restore failed: {e}");
                    crate::util::session::clear_token();
                    auth.set(AuthState::default());
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Exchange credentials for a token, store it, then load the profile.
///
/// # Errors
///
/// Returns the backend's `detail` text, or [`LOGIN_FAILED`].
pub async fn sign_in(email: String, password: String, auth: RwSignal<AuthState>) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let token = crate::net::api::login(&email, &password)
            .await
            .map_err(|e| e.detail_or(LOGIN_FAILED))?;
        crate::util::session::store_token(&token.access_token);
        let user = crate::net::api::fetch_current_user().await.map_err(|e| {
            crate::util::session::clear_token();
            e.detail_or(LOGIN_FAILED)
        })?;
        auth.set(AuthState { user: Some(user), loading: false });
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, auth);
        Err(LOGIN_FAILED.to_owned())
    }
}

/// Create an account. The user still signs in afterwards.
///
/// # Errors
///
/// Returns the backend's `detail` text, or [`REGISTRATION_FAILED`].
pub async fn sign_up(request: crate::net::types::RegisterRequest) -> Result<crate::net::types::User, String> {
    #[cfg(feature = "hydrate")]
    {
        crate::net::api::register(&request)
            .await
            .map_err(|e| e.detail_or(REGISTRATION_FAILED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(REGISTRATION_FAILED.to_owned())
    }
}

/// Drop the token and user, then go to the login page.
pub fn sign_out<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions),
{
    crate::util::session::clear_token();
    auth.set(AuthState::default());
    navigate("/login", NavigateOptions::default());
}
