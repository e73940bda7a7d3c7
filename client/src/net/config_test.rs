use super::*;

#[test]
fn normalize_base_defaults_when_missing_or_blank() {
    assert_eq!(normalize_base(None), DEFAULT_API_BASE);
    assert_eq!(normalize_base(Some("   ")), DEFAULT_API_BASE);
}

#[test]
fn normalize_base_strips_trailing_slashes() {
    assert_eq!(normalize_base(Some("https://api.example.com/api//")), "https://api.example.com/api");
}

#[test]
fn endpoint_joins_with_single_slash() {
    assert_eq!(endpoint("http://h/api", "/jobs"), "http://h/api/jobs");
    assert_eq!(endpoint("http://h/api/", "jobs"), "http://h/api/jobs");
}

#[test]
fn api_base_off_browser_is_default() {
    assert_eq!(api_base(), DEFAULT_API_BASE);
}
