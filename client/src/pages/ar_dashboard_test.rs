use super::*;
use crate::net::types::{MatchingResult, Role, User};

fn signed_in(full_name: Option<&str>) -> AuthState {
    AuthState {
        user: Some(User {
            id: 3,
            email: "jo@example.com".to_owned(),
            full_name: full_name.map(str::to_owned),
            role: Role::ArRequestor,
        }),
        loading: false,
    }
}

#[test]
fn welcome_name_prefers_full_name() {
    assert_eq!(welcome_name(&signed_in(Some("Jo March"))), "Jo March");
}

#[test]
fn welcome_name_falls_back_to_user() {
    assert_eq!(welcome_name(&signed_in(None)), "User");
    assert_eq!(welcome_name(&signed_in(Some("   "))), "User");
    assert_eq!(welcome_name(&AuthState::default()), "User");
}

#[test]
fn activity_icons_by_status() {
    assert_eq!(activity_class(AgentPhase::Completed), "activity__icon activity__icon--done");
    assert_eq!(activity_class(AgentPhase::Error), "activity__icon activity__icon--error");
    assert_eq!(activity_class(AgentPhase::Pending), "activity__icon activity__icon--pending");
}

#[test]
fn recent_activity_covers_every_icon() {
    let statuses: Vec<_> = RECENT_ACTIVITY.iter().map(|a| a.status).collect();
    assert!(statuses.contains(&AgentPhase::Completed));
    assert!(statuses.contains(&AgentPhase::Pending));
    assert!(statuses.contains(&AgentPhase::Error));
}

#[test]
fn selected_job_card_is_highlighted() {
    assert_eq!(job_card_class(true), "job-card job-card--selected");
    assert_eq!(job_card_class(false), "job-card");
}

#[test]
fn overall_badge_tracks_pipeline_status() {
    assert_eq!(overall_badge_class(OverallStatus::Completed), "badge badge--success");
    assert_eq!(overall_badge_class(OverallStatus::InProgress), "badge badge--info");
    assert_eq!(overall_badge_class(OverallStatus::Error), "badge badge--danger");
    assert_eq!(overall_badge_class(OverallStatus::Pending), "badge badge--neutral");
}

fn job(id: i64, status: &str) -> JobDescription {
    JobDescription {
        id,
        title: format!("Job {id}"),
        department: "Engineering".to_owned(),
        description: String::new(),
        skills: Vec::new(),
        experience_required: 2,
        status: status.to_owned(),
        created_at: None,
    }
}

fn result(id: i64, email_sent: bool) -> MatchingResult {
    MatchingResult {
        id,
        job_id: id,
        job_title: String::new(),
        department: String::new(),
        similarity_score: 0.0,
        top_matches: Vec::new(),
        email_sent,
        created_at: None,
    }
}

#[test]
fn overview_stats_follow_loaded_catalog() {
    let catalog = CatalogState {
        jobs: vec![job(1, "active"), job(2, "matching"), job(3, "completed")],
        results: vec![result(1, true), result(2, false)],
        ..CatalogState::default()
    };
    assert_eq!(
        overview_stats(&catalog),
        [("Active Jobs", 2), ("Total Consultants", 0), ("Matching Results", 2), ("Pending Reviews", 1)]
    );
}

#[test]
fn overview_stats_are_zero_before_load() {
    assert!(overview_stats(&CatalogState::default()).iter().all(|(_, n)| *n == 0));
}
