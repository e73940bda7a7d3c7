use super::*;

#[test]
fn email_status_badges() {
    assert_eq!(email_status(true), ("badge badge--success", "Email Sent"));
    assert_eq!(email_status(false), ("badge badge--warning", "Pending"));
}

#[test]
fn send_button_label_prefers_in_flight_state() {
    assert_eq!(send_button_label(true, false), "Sending...");
    assert_eq!(send_button_label(true, true), "Sending...");
    assert_eq!(send_button_label(false, true), "Email Sent");
    assert_eq!(send_button_label(false, false), "Send Email");
}

#[test]
fn empty_results_hint_points_at_uploads() {
    assert!(EMPTY_RESULTS.starts_with("No matching results found."));
}
