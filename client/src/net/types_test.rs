use super::*;
use serde_json::json;

// =============================================================
// User / Role
// =============================================================

#[test]
fn user_accepts_fullname_alias() {
    let user: User = serde_json::from_value(json!({
        "id": 7,
        "email": "ana@example.com",
        "fullname": "Ana Silva",
        "role": "ar_requestor"
    }))
    .unwrap();
    assert_eq!(user.full_name.as_deref(), Some("Ana Silva"));
    assert_eq!(user.role, Role::ArRequestor);
}

#[test]
fn user_display_name_falls_back_to_email_local_part() {
    let user: User = serde_json::from_value(json!({
        "id": 1,
        "email": "bob.jones@example.com",
        "role": "recruiter"
    }))
    .unwrap();
    assert_eq!(user.display_name(), "bob.jones");
}

#[test]
fn user_display_name_ignores_blank_full_name() {
    let user = User {
        id: 1,
        email: "c@example.com".to_owned(),
        full_name: Some("   ".to_owned()),
        role: Role::Recruiter,
    };
    assert_eq!(user.display_name(), "c");
}

#[test]
fn unknown_role_is_preserved() {
    let role: Role = serde_json::from_value(json!("admin")).unwrap();
    assert_eq!(role, Role::Other("admin".to_owned()));
    assert_eq!(serde_json::to_value(&role).unwrap(), json!("admin"));
}

#[test]
fn role_dashboard_paths() {
    assert_eq!(Role::ArRequestor.dashboard_path(), "/ar-dashboard");
    assert_eq!(Role::Recruiter.dashboard_path(), "/recruiter-dashboard");
    assert_eq!(Role::Other("x".to_owned()).dashboard_path(), "/dashboard");
}

// =============================================================
// Jobs / consultants
// =============================================================

#[test]
fn job_accepts_job_id_alias_and_null_skills() {
    let job: JobDescription = serde_json::from_value(json!({
        "job_id": 12,
        "title": "Rust Engineer",
        "department": "Platform",
        "description": "Build things",
        "skills": null,
        "experience_required": 5.0
    }))
    .unwrap();
    assert_eq!(job.id, 12);
    assert!(job.skills.is_empty());
    assert_eq!(job.experience_required, 5);
    assert_eq!(job.status, "active");
}

#[test]
fn consultant_defaults_availability() {
    let c: ConsultantProfile = serde_json::from_value(json!({
        "consultant_id": 3,
        "name": "Dana Lee",
        "email": "dana@example.com",
        "skills": ["Rust", "SQL"],
        "experience": 4
    }))
    .unwrap();
    assert_eq!(c.id, 3);
    assert_eq!(c.availability, "available");
    assert!(c.bio.is_none());
}

// =============================================================
// Results
// =============================================================

#[test]
fn grouped_result_tolerates_missing_matches() {
    let r: GroupedResult = serde_json::from_value(json!({
        "job_description_id": 9,
        "job_title": "QA Lead",
        "department": "Quality",
        "top_matches": "not-a-list",
        "email_sent": false
    }))
    .unwrap();
    assert!(r.top_matches.is_empty());
    assert!((r.best_score() - 0.0).abs() < f64::EPSILON);
}

#[test]
fn top_match_score_accepts_string_and_int() {
    let m: TopMatch = serde_json::from_value(json!({
        "consultant_name": "Eve",
        "score": "87%",
        "experience": 6
    }))
    .unwrap();
    assert!((m.score - 87.0).abs() < f64::EPSILON);
    assert_eq!(m.experience_text(), "6");

    let m: TopMatch = serde_json::from_value(json!({ "consultant_name": "Fay", "score": 71 })).unwrap();
    assert!((m.score - 71.0).abs() < f64::EPSILON);
    assert_eq!(m.experience_text(), "");
}

#[test]
fn best_score_uses_first_match() {
    let r: GroupedResult = serde_json::from_value(json!({
        "job_description_id": 1,
        "top_matches": [
            { "consultant_name": "A", "score": 91 },
            { "consultant_name": "B", "score": 95 }
        ]
    }))
    .unwrap();
    assert!((r.best_score() - 91.0).abs() < f64::EPSILON);
}

// =============================================================
// Agent status
// =============================================================

#[test]
fn agent_phase_parses_wire_names() {
    let status: AgentStatus = serde_json::from_value(json!({
        "comparison": { "status": "completed", "progress": 100 },
        "ranking": { "status": "in-progress", "progress": 42.5 },
        "communication": { "status": "idle", "progress": 0 }
    }))
    .unwrap();
    assert_eq!(status.comparison.status, AgentPhase::Completed);
    assert_eq!(status.ranking.status, AgentPhase::InProgress);
    assert!((status.ranking.progress - 42.5).abs() < f64::EPSILON);
    assert_eq!(status.communication.status, AgentPhase::Idle);
}

#[test]
fn agent_phase_unknown_is_pending() {
    assert_eq!(AgentPhase::from("queued".to_owned()), AgentPhase::Pending);
}

#[test]
fn agent_phase_terminal() {
    assert!(AgentPhase::Completed.is_terminal());
    assert!(AgentPhase::Error.is_terminal());
    assert!(!AgentPhase::InProgress.is_terminal());
    assert!(!AgentPhase::Idle.is_terminal());
}

#[test]
fn agent_status_missing_agents_default_idle() {
    let status: AgentStatus = serde_json::from_value(json!({ "job_id": 4 })).unwrap();
    assert_eq!(status, AgentStatus::default());
}

// =============================================================
// Error detail
// =============================================================

#[test]
fn error_detail_string_message() {
    let d: ErrorDetail = serde_json::from_value(json!({ "detail": "Incorrect email or password" })).unwrap();
    assert_eq!(d.message().as_deref(), Some("Incorrect email or password"));
}

#[test]
fn error_detail_validation_array_uses_first_msg() {
    let d: ErrorDetail = serde_json::from_value(json!({
        "detail": [{ "loc": ["body", "email"], "msg": "value is not a valid email address" }]
    }))
    .unwrap();
    assert_eq!(d.message().as_deref(), Some("value is not a valid email address"));
}
