use super::*;

fn user(role: Role) -> User {
    User {
        id: 1,
        email: "alex@example.com".to_owned(),
        full_name: Some("Alex Kim".to_owned()),
        role,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn auth_state_pending_is_loading() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(state.user.is_none());
}

// =============================================================
// Role helpers
// =============================================================

#[test]
fn dashboard_path_follows_role() {
    let ar = AuthState { user: Some(user(Role::ArRequestor)), loading: false };
    assert_eq!(ar.dashboard_path(), "/ar-dashboard");

    let rec = AuthState { user: Some(user(Role::Recruiter)), loading: false };
    assert_eq!(rec.dashboard_path(), "/recruiter-dashboard");
}

#[test]
fn dashboard_path_without_user_is_recruiter() {
    assert_eq!(AuthState::default().dashboard_path(), "/recruiter-dashboard");
}

#[test]
fn display_name_uses_user() {
    let state = AuthState { user: Some(user(Role::Recruiter)), loading: false };
    assert_eq!(state.display_name().as_deref(), Some("Alex Kim"));
    assert_eq!(AuthState::default().display_name(), None);
}
