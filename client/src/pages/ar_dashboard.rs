//! AR requestor dashboard: overview cards and the AI matching workflow.
//!
//! DESIGN
//! ======
//! Matching state lives in app context so a run survives navigation. The
//! status poll belongs to this page: it starts after a successful start
//! request (or on mount when a run is already active), and stops when the
//! run reaches a terminal phase or the page unmounts.

#[cfg(test)]
#[path = "ar_dashboard_test.rs"]
mod ar_dashboard_test;

use std::ops::ControlFlow;

use leptos::prelude::*;

use crate::components::catalog_notice::CatalogErrorNotice;
use crate::components::progress_bar::{ProgressBar, ProgressSize};
use crate::components::status_card::AgentStatusCard;
use crate::net::api;
use crate::net::types::{AgentPhase, JobDescription};
use crate::state::auth::AuthState;
use crate::state::catalog::CatalogState;
use crate::state::matching::{MatchingState, OverallStatus, STATUS_POLL_MS};
use crate::util::format::job_status_class;
use crate::util::poll::{PollHandle, spawn_poll};

/// Overview figures shown above the workflow as `(label, value)`.
pub fn overview_stats(catalog: &CatalogState) -> [(&'static str, usize); 4] {
    [
        ("Active Jobs", catalog.jobs.iter().filter(|j| j.status != "completed").count()),
        ("Total Consultants", catalog.consultants.len()),
        ("Matching Results", catalog.results.len()),
        ("Pending Reviews", catalog.pending_reviews()),
    ]
}

/// One entry of the recent activity feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activity {
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
    pub status: AgentPhase,
}

pub const RECENT_ACTIVITY: [Activity; 4] = [
    Activity {
        title: "New Job Description Added",
        description: "Senior Software Engineer position",
        time: "2 hours ago",
        status: AgentPhase::Completed,
    },
    Activity {
        title: "Matching Process Started",
        description: "For Product Manager role",
        time: "4 hours ago",
        status: AgentPhase::Pending,
    },
    Activity {
        title: "Consultant Profile Updated",
        description: "John Doe updated their skills",
        time: "1 day ago",
        status: AgentPhase::Completed,
    },
    Activity {
        title: "Matching Failed",
        description: "Error in processing job ID #123",
        time: "2 days ago",
        status: AgentPhase::Error,
    },
];

/// Name for the welcome banner: the full name, else `"User"`.
pub fn welcome_name(state: &AuthState) -> String {
    state
        .user
        .as_ref()
        .and_then(|u| u.full_name.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("User")
        .to_owned()
}

pub fn activity_class(status: AgentPhase) -> &'static str {
    match status {
        AgentPhase::Completed => "activity__icon activity__icon--done",
        AgentPhase::Error => "activity__icon activity__icon--error",
        _ => "activity__icon activity__icon--pending",
    }
}

pub fn overall_badge_class(status: OverallStatus) -> &'static str {
    match status {
        OverallStatus::Completed => "badge badge--success",
        OverallStatus::InProgress => "badge badge--info",
        OverallStatus::Error => "badge badge--danger",
        OverallStatus::Pending => "badge badge--neutral",
    }
}

pub fn job_card_class(selected: bool) -> &'static str {
    if selected { "job-card job-card--selected" } else { "job-card" }
}

#[component]
pub fn ArDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let matching = expect_context::<RwSignal<MatchingState>>();

    let page = PollHandle::new();
    let page_cleanup = page.clone();
    on_cleanup(move || page_cleanup.stop());

    // First job is selected as soon as the catalog arrives.
    Effect::new(move || {
        catalog.with(|c| {
            if matching.with_untracked(|m| m.selected_job_id.is_none()) && !c.jobs.is_empty() {
                matching.update(|m| m.ensure_selection(&c.jobs));
            }
        });
    });

    // Resume polling for a run started before navigating away.
    if let Some(job_id) = matching.with_untracked(|m| m.selected_job_id.filter(|_| m.running)) {
        start_status_poll(matching, job_id, page.clone());
    }

    let on_start = move |_| {
        let Some(job_id) = matching.try_update(MatchingState::begin).flatten() else {
            return;
        };
        let page = page.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = api::start_matching(job_id).await {
                leptos::logging::warn!("failed to start matching for job {job_id}: {e}");
                matching.update(|m| m.fail(format!("Failed to start matching: {e}")));
                return;
            }
            let _ = poll_once(matching, job_id).await;
            if matching.with_untracked(|m| m.running) {
                start_status_poll(matching, job_id, page);
            }
        });
    };

    let running = move || matching.with(|m| m.running);
    let overall = move || matching.with(MatchingState::overall_status);
    let overall_progress = Signal::derive(move || f64::from(matching.with(MatchingState::overall_progress)));
    let comparison = Signal::derive(move || matching.with(|m| m.status.comparison));
    let ranking = Signal::derive(move || matching.with(|m| m.status.ranking));
    let communication = Signal::derive(move || matching.with(|m| m.status.communication));

    view! {
        <div class="page ar-dashboard">
            <section class="welcome-banner">
                <h2>{move || format!("Welcome back, {}!", auth.with(welcome_name))}</h2>
                <p>"Here's what's happening with your recruitment process."</p>
            </section>

            <CatalogErrorNotice/>

            <div class="stat-grid">
                {(0..4)
                    .map(|slot| {
                        let stat = move || catalog.with(overview_stats)[slot];
                        view! {
                            <div class="stat-card">
                                <span class="stat-card__label">{move || stat().0}</span>
                                <span class="stat-card__value">{move || stat().1}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="quick-actions">
                <a class="quick-action" href="/job-descriptions">
                    <span class="quick-action__title">"Create New Job"</span>
                    <span class="quick-action__hint">"Add a new job description"</span>
                </a>
                <a class="quick-action" href="/matching-results">
                    <span class="quick-action__title">"View Matches"</span>
                    <span class="quick-action__hint">"Check matching results"</span>
                </a>
            </div>

            <section class="panel">
                <h3 class="panel__title">"Recent Activity"</h3>
                <ul class="activity">
                    {RECENT_ACTIVITY
                        .iter()
                        .map(|a| {
                            view! {
                                <li class="activity__item">
                                    <span class=activity_class(a.status)></span>
                                    <div class="activity__body">
                                        <p class="activity__title">{a.title}</p>
                                        <p class="activity__description">{a.description}</p>
                                    </div>
                                    <span class="activity__time">{a.time}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>

            <section class="panel matching">
                <div class="panel__header">
                    <div>
                        <h2 class="panel__title">"AI Job Matching"</h2>
                        <p class="panel__hint">"Start the matching process for selected job"</p>
                    </div>
                    <button
                        class="btn btn--primary"
                        on:click=on_start
                        disabled=move || running() || matching.with(|m| m.selected_job_id.is_none())
                    >
                        {move || if running() { "Matching in Progress..." } else { "Start AI Matching" }}
                    </button>
                </div>

                <Show when=move || matching.with(|m| m.error.is_some())>
                    <p class="panel__error">{move || matching.with(|m| m.error.clone().unwrap_or_default())}</p>
                </Show>

                <div class="job-grid">
                    <For
                        each=move || catalog.with(|c| c.jobs.clone())
                        key=|job| job.id
                        children=move |job: JobDescription| {
                            let id = job.id;
                            let selected = move || matching.with(|m| m.selected_job_id == Some(id));
                            view! {
                                <button
                                    class=move || job_card_class(selected())
                                    disabled=running
                                    on:click=move |_| matching.update(|m| m.selected_job_id = Some(id))
                                >
                                    <span class="job-card__title">{job.title.clone()}</span>
                                    <span class="job-card__department">{job.department.clone()}</span>
                                    <span class=job_status_class(&job.status)>{job.status.clone()}</span>
                                </button>
                            }
                        }
                    />
                </div>

                <div class="status-grid">
                    <AgentStatusCard
                        title="Comparison Agent"
                        description="AI analyzing job description vs consultant profiles"
                        progress=comparison
                    />
                    <AgentStatusCard
                        title="Ranking Agent"
                        description="AI ranking consultant profiles by similarity"
                        progress=ranking
                    />
                    <AgentStatusCard
                        title="Communication Agent"
                        description="AI sending results to stakeholders"
                        progress=communication
                    />
                </div>

                <div class="workflow">
                    <h3 class="panel__title">"Workflow Progress"</h3>
                    <WorkflowStep label="Document Comparison" value=Signal::derive(move || comparison.get().progress)/>
                    <WorkflowStep label="Profile Ranking" value=Signal::derive(move || ranking.get().progress)/>
                    <WorkflowStep label="Email Communication" value=Signal::derive(move || communication.get().progress)/>
                    <div class="workflow__overall">
                        <span class="workflow__label">"Overall Progress"</span>
                        <span class=move || overall_badge_class(overall())>
                            {move || overall().as_str()}
                        </span>
                        <ProgressBar value=overall_progress size=ProgressSize::Large show_label=true/>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn WorkflowStep(label: &'static str, value: Signal<f64>) -> impl IntoView {
    view! {
        <div class="workflow__step">
            <span class="workflow__label">{label}</span>
            <ProgressBar value=value show_label=true/>
        </div>
    }
}

/// Fetch and apply one status snapshot. Breaks once the run has ended.
async fn poll_once(matching: RwSignal<MatchingState>, job_id: i64) -> ControlFlow<()> {
    match api::fetch_matching_status(job_id).await {
        Ok(status) => matching.update(|m| m.apply_status(status)),
        Err(e) => leptos::logging::warn!("status poll for job {job_id} failed: {e}"),
    }
    if matching.with_untracked(|m| m.running) { ControlFlow::Continue(()) } else { ControlFlow::Break(()) }
}

fn start_status_poll(matching: RwSignal<MatchingState>, job_id: i64, page: PollHandle) {
    let _ = spawn_poll(STATUS_POLL_MS, move || {
        let page = page.clone();
        async move {
            if !page.is_alive() {
                return ControlFlow::Break(());
            }
            poll_once(matching, job_id).await
        }
    });
}
