use super::*;

#[test]
fn from_status_prefers_backend_detail() {
    let err = ApiError::from_status(400, Some("Email already registered".to_owned()));
    assert_eq!(err.to_string(), "Email already registered");
}

#[test]
fn from_status_without_detail_formats_code() {
    let err = ApiError::from_status(502, None);
    assert_eq!(err.to_string(), "request failed: 502");
}

#[test]
fn from_status_401_is_unauthorized() {
    let err = ApiError::from_status(401, Some("Could not validate credentials".to_owned()));
    assert_eq!(err, ApiError::Unauthorized("Could not validate credentials".to_owned()));
}

#[test]
fn detail_or_uses_fallback_for_transport_errors() {
    assert_eq!(ApiError::Network("offline".to_owned()).detail_or("Login failed"), "Login failed");
    assert_eq!(ApiError::Unavailable.detail_or("Login failed"), "Login failed");
    assert_eq!(
        ApiError::from_status(401, Some("Incorrect email or password".to_owned())).detail_or("Login failed"),
        "Incorrect email or password"
    );
}
