use super::*;

#[test]
fn notice_class_and_text() {
    let info = Notice::Info("Match notifications sent.".to_owned());
    assert_eq!(info.class(), "notice notice--info");
    assert_eq!(info.text(), "Match notifications sent.");

    let error = Notice::Error("boom".to_owned());
    assert_eq!(error.class(), "notice notice--error");
    assert_eq!(error.text(), "boom");
}

#[test]
fn monitor_class_by_phase() {
    assert_eq!(monitor_class(AgentPhase::Completed), "monitor__icon monitor__icon--done");
    assert_eq!(monitor_class(AgentPhase::InProgress), "monitor__icon monitor__icon--active");
    assert_eq!(monitor_class(AgentPhase::Error), "monitor__icon monitor__icon--error");
    assert_eq!(monitor_class(AgentPhase::Idle), "monitor__icon");
    assert_eq!(monitor_class(AgentPhase::Pending), "monitor__icon");
}

#[test]
fn report_file_is_csv() {
    assert!(REPORT_FILE_NAME.ends_with(".csv"));
}
