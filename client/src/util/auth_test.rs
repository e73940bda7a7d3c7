use super::*;
use crate::net::types::User;

fn signed_in(role: Role) -> AuthState {
    AuthState {
        user: Some(User {
            id: 7,
            email: "sam@example.com".to_owned(),
            full_name: None,
            role,
        }),
        loading: false,
    }
}

// =============================================================
// Unauthenticated redirect
// =============================================================

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::pending()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&signed_in(Role::Recruiter)));
}

// =============================================================
// Role guard
// =============================================================

#[test]
fn recruiter_is_bounced_from_ar_dashboard() {
    assert_eq!(role_redirect("/ar-dashboard", &Role::Recruiter), Some("/recruiter-dashboard"));
    assert_eq!(role_redirect("/ar-dashboard/new", &Role::Recruiter), Some("/recruiter-dashboard"));
}

#[test]
fn ar_requestor_is_bounced_from_recruiter_dashboard() {
    assert_eq!(role_redirect("/recruiter-dashboard", &Role::ArRequestor), Some("/ar-dashboard"));
}

#[test]
fn unknown_role_cannot_use_either_dashboard() {
    let other = Role::Other("admin".to_owned());
    assert_eq!(role_redirect("/ar-dashboard", &other), Some("/dashboard"));
    assert_eq!(role_redirect("/recruiter-dashboard", &other), Some("/dashboard"));
}

#[test]
fn landing_redirects_settle_for_every_role() {
    let roles = [Role::ArRequestor, Role::Recruiter, Role::Other("admin".to_owned())];
    for role in &roles {
        for start in [role.dashboard_path(), "/ar-dashboard", "/recruiter-dashboard"] {
            let mut path = start;
            let mut hops = vec![path];
            while let Some(next) = role_redirect(path, role) {
                path = next;
                hops.push(path);
                assert!(hops.len() <= 2, "redirect loop for {role:?}: {hops:?}");
            }
            assert_eq!(path, role.dashboard_path(), "{role:?} from {start}");
        }
    }
}

#[test]
fn shared_pages_are_open_to_every_role() {
    for path in ["/job-descriptions", "/consultant-profiles", "/matching-results", "/monitoring", "/dashboard"] {
        assert_eq!(role_redirect(path, &Role::ArRequestor), None, "{path}");
        assert_eq!(role_redirect(path, &Role::Recruiter), None, "{path}");
    }
}

#[test]
fn owners_pass_their_own_dashboard() {
    assert_eq!(role_redirect("/ar-dashboard", &Role::ArRequestor), None);
    assert_eq!(role_redirect("/recruiter-dashboard", &Role::Recruiter), None);
}

// =============================================================
// Form validation
// =============================================================

#[test]
fn login_requires_both_fields() {
    assert!(validate_login("a@b.c", "secret").is_ok());
    assert!(validate_login("  ", "secret").is_err());
    assert!(validate_login("a@b.c", "").is_err());
}

#[test]
fn registration_checks_fields_in_order() {
    assert!(validate_registration("Sam Lee", "sam@x.io", "secret1", "secret1").is_ok());
    assert_eq!(validate_registration(" ", "bad", "1", "2"), Err("Enter your full name.".to_owned()));
    assert_eq!(
        validate_registration("Sam", "bad", "1", "2"),
        Err("Enter a valid email address.".to_owned())
    );
    assert_eq!(
        validate_registration("Sam", "sam@x.io", "12345", "12345"),
        Err("Password must be at least 6 characters.".to_owned())
    );
    assert_eq!(
        validate_registration("Sam", "sam@x.io", "123456", "1234567"),
        Err("Passwords do not match.".to_owned())
    );
}
