use super::*;
use crate::net::types::AgentProgress;

fn progress(status: AgentPhase, progress: f64) -> AgentProgress {
    AgentProgress { status, progress }
}

fn status(c: AgentProgress, r: AgentProgress, m: AgentProgress) -> AgentStatus {
    AgentStatus { comparison: c, ranking: r, communication: m }
}

fn job(id: i64) -> JobDescription {
    JobDescription {
        id,
        title: format!("Job {id}"),
        department: String::new(),
        description: String::new(),
        skills: Vec::new(),
        experience_required: 0,
        status: "active".to_owned(),
        created_at: None,
    }
}

// =============================================================
// Selection + run lifecycle
// =============================================================

#[test]
fn ensure_selection_picks_first_job_once() {
    let mut state = MatchingState::default();
    state.ensure_selection(&[job(4), job(5)]);
    assert_eq!(state.selected_job_id, Some(4));

    state.selected_job_id = Some(5);
    state.ensure_selection(&[job(4), job(5)]);
    assert_eq!(state.selected_job_id, Some(5));
}

#[test]
fn ensure_selection_with_no_jobs_stays_empty() {
    let mut state = MatchingState::default();
    state.ensure_selection(&[]);
    assert_eq!(state.selected_job_id, None);
}

#[test]
fn begin_requires_selection() {
    let mut state = MatchingState::default();
    assert_eq!(state.begin(), None);
    assert!(!state.running);
}

#[test]
fn begin_is_rejected_while_running() {
    let mut state = MatchingState { selected_job_id: Some(2), ..MatchingState::default() };
    assert_eq!(state.begin(), Some(2));
    assert!(state.running);
    assert_eq!(state.begin(), None);
}

#[test]
fn fail_stops_run_and_records_error() {
    let mut state = MatchingState { selected_job_id: Some(2), ..MatchingState::default() };
    state.begin();
    state.fail("boom".to_owned());
    assert!(!state.running);
    assert_eq!(state.error.as_deref(), Some("boom"));
}

#[test]
fn apply_status_keeps_running_until_communication_terminal() {
    let mut state = MatchingState { selected_job_id: Some(1), ..MatchingState::default() };
    state.begin();

    state.apply_status(status(
        progress(AgentPhase::Completed, 100.0),
        progress(AgentPhase::InProgress, 50.0),
        progress(AgentPhase::Pending, 0.0),
    ));
    assert!(state.running);

    state.apply_status(status(
        progress(AgentPhase::Completed, 100.0),
        progress(AgentPhase::Completed, 100.0),
        progress(AgentPhase::Error, 10.0),
    ));
    assert!(!state.running);
}

// =============================================================
// Aggregates
// =============================================================

#[test]
fn overall_progress_is_rounded_mean() {
    let state = MatchingState {
        status: status(
            progress(AgentPhase::Completed, 100.0),
            progress(AgentPhase::InProgress, 50.0),
            progress(AgentPhase::Pending, 0.0),
        ),
        ..MatchingState::default()
    };
    assert_eq!(state.overall_progress(), 50);

    let state = MatchingState {
        status: status(
            progress(AgentPhase::Completed, 100.0),
            progress(AgentPhase::InProgress, 1.0),
            progress(AgentPhase::Pending, 0.0),
        ),
        ..MatchingState::default()
    };
    assert_eq!(state.overall_progress(), 34);
}

#[test]
fn overall_status_error_wins() {
    let state = MatchingState {
        status: status(
            progress(AgentPhase::Error, 0.0),
            progress(AgentPhase::InProgress, 0.0),
            progress(AgentPhase::Completed, 0.0),
        ),
        ..MatchingState::default()
    };
    assert_eq!(state.overall_status(), OverallStatus::Error);
}

#[test]
fn overall_status_in_progress_then_completed_then_pending() {
    let mut state = MatchingState {
        status: status(
            progress(AgentPhase::Completed, 100.0),
            progress(AgentPhase::InProgress, 10.0),
            progress(AgentPhase::Idle, 0.0),
        ),
        ..MatchingState::default()
    };
    assert_eq!(state.overall_status(), OverallStatus::InProgress);

    state.status = status(
        progress(AgentPhase::Completed, 100.0),
        progress(AgentPhase::Completed, 100.0),
        progress(AgentPhase::Completed, 100.0),
    );
    assert_eq!(state.overall_status(), OverallStatus::Completed);

    state.status = AgentStatus::default();
    assert_eq!(state.overall_status(), OverallStatus::Pending);
}
