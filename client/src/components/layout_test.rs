use super::*;

#[test]
fn nav_link_active_on_exact_and_nested_paths() {
    assert_eq!(nav_link_class("/job-descriptions", "/job-descriptions"), "app-nav__link app-nav__link--active");
    assert_eq!(nav_link_class("/job-descriptions/12", "/job-descriptions"), "app-nav__link app-nav__link--active");
}

#[test]
fn nav_link_inactive_on_prefix_lookalikes() {
    assert_eq!(nav_link_class("/monitoring-old", "/monitoring"), "app-nav__link");
    assert_eq!(nav_link_class("/", "/monitoring"), "app-nav__link");
}

#[test]
fn ar_dashboard_link_active_on_shared_dashboard_route() {
    assert_eq!(dashboard_link_class("/dashboard", "/ar-dashboard"), "app-nav__link app-nav__link--active");
    assert_eq!(dashboard_link_class("/ar-dashboard", "/ar-dashboard"), "app-nav__link app-nav__link--active");
    assert_eq!(dashboard_link_class("/dashboard", "/dashboard"), "app-nav__link app-nav__link--active");
    assert_eq!(dashboard_link_class("/dashboard", "/recruiter-dashboard"), "app-nav__link");
    assert_eq!(dashboard_link_class("/monitoring", "/ar-dashboard"), "app-nav__link");
}

#[test]
fn role_display_names() {
    assert_eq!(role_display("ar_requestor"), "AR Requestor");
    assert_eq!(role_display("recruiter"), "Recruiter");
    assert_eq!(role_display("hiring_manager"), "hiring manager");
}
