#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state while a stored token is being checked.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn role(&self) -> Option<&Role> {
        self.user.as_ref().map(|u| &u.role)
    }

    /// Dashboard for the signed-in role; recruiters' when nobody is signed in.
    #[must_use]
    pub fn dashboard_path(&self) -> &'static str {
        self.role().map_or("/recruiter-dashboard", Role::dashboard_path)
    }

    /// Name shown in the header and welcome banner.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.user.as_ref().map(User::display_name)
    }
}
