use super::*;
use crate::net::types::TopMatch;

fn top(name: &str, score: f64) -> TopMatch {
    TopMatch {
        consultant_name: name.to_owned(),
        score,
        experience: Some(serde_json::json!(5)),
        skills: vec!["Rust".to_owned(), "SQL".to_owned()],
        matching_skills: vec!["Rust".to_owned()],
        missing_skills: Vec::new(),
        llm_reasoning: Some("Strong systems background".to_owned()),
    }
}

fn row(id: i64, matches: Vec<TopMatch>, email_sent: bool) -> GroupedResult {
    GroupedResult {
        job_description_id: id,
        job_title: format!("Job {id}"),
        department: "Eng".to_owned(),
        top_matches: matches,
        email_sent,
        created_at: None,
    }
}

// =============================================================
// Score bands
// =============================================================

#[test]
fn score_band_thresholds() {
    assert_eq!(ScoreBand::of(80.0), ScoreBand::High);
    assert_eq!(ScoreBand::of(79.9), ScoreBand::Medium);
    assert_eq!(ScoreBand::of(60.0), ScoreBand::Medium);
    assert_eq!(ScoreBand::of(59.0), ScoreBand::Low);
    assert_eq!(ScoreBand::of(0.0), ScoreBand::Low);
}

#[test]
fn score_label_rounds() {
    assert_eq!(score_label(87.0), "87%");
    assert_eq!(score_label(66.6), "67%");
}

// =============================================================
// Summary
// =============================================================

#[test]
fn summary_counts_all_matches() {
    let state = ResultsState {
        rows: vec![
            row(1, vec![top("A", 91.0), top("B", 70.0)], false),
            row(2, vec![top("C", 40.0)], false),
            row(3, Vec::new(), false),
        ],
        ..ResultsState::default()
    };
    assert_eq!(state.summary(), ResultSummary { total: 3, high: 1, medium: 1, low: 1 });
}

// =============================================================
// Selection + email
// =============================================================

#[test]
fn mark_email_sent_is_visible_through_selection() {
    let mut state = ResultsState { rows: vec![row(1, vec![top("A", 90.0)], false)], ..ResultsState::default() };
    state.select(1);
    assert!(!state.selected_row().unwrap().email_sent);

    state.mark_email_sent(1);
    assert!(state.rows[0].email_sent);
    assert!(state.selected_row().unwrap().email_sent);
}

#[test]
fn select_clears_email_error() {
    let mut state = ResultsState {
        rows: vec![row(1, Vec::new(), false)],
        email_error: Some(SEND_EMAIL_FAILED.to_owned()),
        ..ResultsState::default()
    };
    state.select(1);
    assert!(state.email_error.is_none());
    state.close();
    assert!(state.selected_row().is_none());
}

#[test]
fn can_send_respects_sent_flag_and_in_flight() {
    let mut state = ResultsState {
        rows: vec![row(1, Vec::new(), false), row(2, Vec::new(), true)],
        ..ResultsState::default()
    };
    assert!(state.can_send(1));
    assert!(!state.can_send(2));
    assert!(!state.can_send(99));
    state.sending = true;
    assert!(!state.can_send(1));
}

#[test]
fn can_export_requires_rows_and_idle() {
    let mut state = ResultsState::default();
    assert!(!state.can_export());
    state.rows.push(row(1, Vec::new(), false));
    assert!(state.can_export());
    state.loading = true;
    assert!(!state.can_export());
}

// =============================================================
// Export
// =============================================================

#[test]
fn export_csv_writes_header_and_one_line_per_match() {
    let rows = vec![row(1, vec![top("Ann Lee", 88.0), top("Bo Chen", 61.5)], true), row(2, Vec::new(), false)];
    let csv = export_csv(&rows).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "Job Title,Department,Consultant Name,Score,Experience,Skills,LLM Reasoning,Email Sent"
    );
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "Job 1,Eng,Ann Lee,88,5,Rust; SQL,Strong systems background,Yes");
    assert!(lines[2].starts_with("Job 1,Eng,Bo Chen,61.5,"));
}

#[test]
fn export_csv_escapes_quotes_and_commas() {
    let mut m = top("Dee", 75.0);
    m.llm_reasoning = Some("Good fit, \"strong\" Rust".to_owned());
    let csv = export_csv(&[row(1, vec![m], false)]).unwrap();
    assert!(csv.contains("\"Good fit, \"\"strong\"\" Rust\""));
}
