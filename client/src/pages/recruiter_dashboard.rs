//! Recruiter console: system metrics, agent monitors, and the job table.

#[cfg(test)]
#[path = "recruiter_dashboard_test.rs"]
mod recruiter_dashboard_test;

use leptos::prelude::*;

use crate::components::catalog_notice::CatalogErrorNotice;
use crate::net::types::{AgentPhase, AgentProgress, JobDescription};
use crate::state::catalog::{CatalogState, JOB_STATUS_FILTERS, filter_jobs, jobs_report_csv};
use crate::state::matching::MatchingState;
use crate::util::format::{format_date, job_status_class, overflow_label, skill_preview};

/// File name for "Generate Report".
pub const REPORT_FILE_NAME: &str = "job_report.csv";

/// Skills shown per table row before "+N more".
const SKILL_PREVIEW: usize = 3;

/// Outcome of a notify/report action, shown under the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Info(_) => "notice notice--info",
            Self::Error(_) => "notice notice--error",
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Info(t) | Self::Error(t) => t,
        }
    }
}

/// Circle class for an agent monitor.
pub fn monitor_class(phase: AgentPhase) -> &'static str {
    match phase {
        AgentPhase::Completed => "monitor__icon monitor__icon--done",
        AgentPhase::InProgress => "monitor__icon monitor__icon--active",
        AgentPhase::Error => "monitor__icon monitor__icon--error",
        AgentPhase::Pending | AgentPhase::Idle => "monitor__icon",
    }
}

#[component]
pub fn RecruiterDashboardPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let matching = expect_context::<RwSignal<MatchingState>>();

    let search = RwSignal::new(String::new());
    let status_filter = RwSignal::new("all".to_owned());
    let notice = RwSignal::new(None::<Notice>);
    let notifying = RwSignal::new(false);

    let metrics = move || catalog.with(CatalogState::metrics);
    let filtered = move || {
        catalog.with(|c| {
            search.with(|term| {
                status_filter.with(|status| filter_jobs(&c.jobs, term, status).into_iter().cloned().collect::<Vec<_>>())
            })
        })
    };

    let on_report = move |_| {
        let jobs = filtered();
        let refs: Vec<_> = jobs.iter().collect();
        match jobs_report_csv(&refs) {
            Ok(csv) => {
                #[cfg(feature = "hydrate")]
                if let Err(e) = crate::util::download::save_text(REPORT_FILE_NAME, "text/csv;charset=utf-8", &csv) {
                    notice.set(Some(Notice::Error(format!("Report download failed: {e}"))));
                    return;
                }
                #[cfg(not(feature = "hydrate"))]
                let _ = csv;
                notice.set(Some(Notice::Info(format!("Report generated for {} jobs.", refs.len()))));
            }
            Err(e) => notice.set(Some(Notice::Error(format!("Report generation failed: {e}")))),
        }
    };

    let on_notify = move |_| {
        if notifying.get_untracked() {
            return;
        }
        notifying.set(true);
        notice.set(None);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::notify_matches().await;
            notifying.set(false);
            match result {
                Ok(_) => notice.set(Some(Notice::Info("Match notifications sent.".to_owned()))),
                Err(e) => {
                    leptos::logging::warn!("notify matches failed: {e}");
                    notice.set(Some(Notice::Error(format!("Failed to notify matches: {e}"))));
                }
            }
        });
    };

    let agents = move || matching.with(|m| m.status.agents());

    view! {
        <div class="page recruiter-dashboard">
            <header class="page__header">
                <div>
                    <h1>"Recruiter Console"</h1>
                    <p class="page__subtitle">"Monitor and manage the matching system"</p>
                </div>
                <div class="page__actions">
                    <button class="btn" on:click=on_notify disabled=move || notifying.get()>
                        {move || if notifying.get() { "Notifying..." } else { "Notify Matches" }}
                    </button>
                    <button class="btn btn--primary" on:click=on_report>
                        "Generate Report"
                    </button>
                </div>
            </header>

            {move || notice.get().map(|n| view! { <p class=n.class()>{n.text().to_owned()}</p> })}
            <CatalogErrorNotice/>

            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-card__label">"Total Jobs"</span>
                    <span class="stat-card__value">{move || metrics().total_jobs}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Active Matching"</span>
                    <span class="stat-card__value stat-card__value--warning">{move || metrics().active_matching}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Completed"</span>
                    <span class="stat-card__value stat-card__value--success">{move || metrics().completed_jobs}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Consultants"</span>
                    <span class="stat-card__value">{move || metrics().total_consultants}</span>
                </div>
            </div>

            <section class="panel">
                <h2 class="panel__title">"Agent Framework Status"</h2>
                <div class="monitor-grid">
                    {["Comparison Agent", "Ranking Agent", "Communication Agent"]
                        .into_iter()
                        .enumerate()
                        .map(|(i, name)| {
                            let agent = move || -> AgentProgress { agents()[i] };
                            view! {
                                <div class="monitor">
                                    <span class=move || monitor_class(agent().status)></span>
                                    <h3 class="monitor__name">{name}</h3>
                                    <p class="monitor__line">{move || format!("Status: {}", agent().status.as_str())}</p>
                                    <p class="monitor__line">{move || format!("Progress: {:.0}%", agent().progress)}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="panel">
                <h2 class="panel__title">"Job Description Management"</h2>
                <div class="filters">
                    <input
                        class="filters__search"
                        type="text"
                        placeholder="Search by job title or skills..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <select
                        class="filters__select"
                        prop:value=move || status_filter.get()
                        on:change=move |ev| status_filter.set(event_target_value(&ev))
                    >
                        {JOB_STATUS_FILTERS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </div>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Job Title"</th>
                            <th>"Department"</th>
                            <th>"Skills Required"</th>
                            <th>"Status"</th>
                            <th>"Created"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=filtered
                            key=|job| job.id
                            children=move |job: JobDescription| {
                                let (shown, hidden) = skill_preview(&job.skills, SKILL_PREVIEW);
                                let chips = shown
                                    .iter()
                                    .map(|s| view! { <span class="chip">{s.clone()}</span> })
                                    .collect_view();
                                view! {
                                    <tr>
                                        <td class="table__strong">{job.title.clone()}</td>
                                        <td>{job.department.clone()}</td>
                                        <td>
                                            <div class="chips">
                                                {chips}
                                                {overflow_label(hidden).map(|l| view! { <span class="chips__more">{l}</span> })}
                                            </div>
                                        </td>
                                        <td><span class=job_status_class(&job.status)>{job.status.clone()}</span></td>
                                        <td>{format_date(job.created_at.as_deref())}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>
        </div>
    }
}
