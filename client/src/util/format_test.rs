use super::*;

#[test]
fn initials_takes_first_letter_of_each_word() {
    assert_eq!(initials("Ana María Silva"), "AMS");
    assert_eq!(initials("  bob   lee "), "BL");
    assert_eq!(initials(""), "");
}

#[test]
fn format_date_strips_time() {
    assert_eq!(format_date(Some("2024-03-09T14:22:01.123Z")), "2024-03-09");
    assert_eq!(format_date(Some("2024-03-09 14:22:01")), "2024-03-09");
    assert_eq!(format_date(None), "-");
    assert_eq!(format_date(Some("  ")), "-");
}

#[test]
fn skill_preview_limits_and_counts_hidden() {
    let skills: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| (*s).to_owned()).collect();
    let (shown, hidden) = skill_preview(&skills, 3);
    assert_eq!(shown.len(), 3);
    assert_eq!(hidden, 2);
    assert_eq!(overflow_label(hidden).as_deref(), Some("+2 more"));

    let (shown, hidden) = skill_preview(&skills[..2], 4);
    assert_eq!(shown.len(), 2);
    assert_eq!(overflow_label(hidden), None);
}

#[test]
fn status_classes() {
    assert_eq!(job_status_class("completed"), "badge badge--success");
    assert_eq!(job_status_class("matching"), "badge badge--warning");
    assert_eq!(job_status_class("active"), "badge badge--neutral");
    assert_eq!(availability_class("available"), "badge badge--success");
    assert_eq!(availability_class("busy"), "badge badge--warning");
    assert_eq!(availability_class("unavailable"), "badge badge--danger");
}

#[test]
fn bio_falls_back_when_blank() {
    assert_eq!(bio_or_default(Some("Rustacean")), "Rustacean");
    assert_eq!(bio_or_default(Some("  ")), DEFAULT_BIO);
    assert_eq!(bio_or_default(None), DEFAULT_BIO);
}
