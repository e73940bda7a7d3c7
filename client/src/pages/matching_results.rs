//! Grouped matching results: summary, table, detail dialog, email, export.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch shows the empty state rather than an error. Email failures
//! surface as a fixed message; export failures are logged.

#[cfg(test)]
#[path = "matching_results_test.rs"]
mod matching_results_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::api;
use crate::net::types::{GroupedResult, TopMatch};
use crate::state::results::{EXPORT_FILE_NAME, ResultsState, SEND_EMAIL_FAILED, ScoreBand, export_csv, score_label};
use crate::util::format::format_date;

/// Matches previewed per table row.
const TOP_PREVIEW: usize = 3;

pub const EMPTY_RESULTS: &str =
    "No matching results found. Please upload consultant profiles or job descriptions to see matches.";

pub fn email_status(sent: bool) -> (&'static str, &'static str) {
    if sent { ("badge badge--success", "Email Sent") } else { ("badge badge--warning", "Pending") }
}

pub fn send_button_label(sending: bool, sent: bool) -> &'static str {
    if sending {
        "Sending..."
    } else if sent {
        "Email Sent"
    } else {
        "Send Email"
    }
}

#[component]
pub fn MatchingResultsPage() -> impl IntoView {
    let results = RwSignal::new(ResultsState { loading: true, ..ResultsState::default() });

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let rows = match api::fetch_grouped_results().await {
                Ok(rows) => rows,
                Err(e) => {
                    leptos::logging::warn!("failed to load grouped results: {e}");
                    Vec::new()
                }
            };
            results.update(|r| {
                r.rows = rows;
                r.loading = false;
            });
        });
    });

    let send_email = move |job_description_id: i64| {
        if !results.with_untracked(|r| r.can_send(job_description_id)) {
            return;
        }
        results.update(|r| {
            r.sending = true;
            r.email_error = None;
        });
        leptos::task::spawn_local(async move {
            let outcome = api::send_matching_email(job_description_id).await;
            results.update(|r| {
                r.sending = false;
                match outcome {
                    Ok(()) => r.mark_email_sent(job_description_id),
                    Err(e) => {
                        leptos::logging::warn!("send matching email for {job_description_id} failed: {e}");
                        r.email_error = Some(SEND_EMAIL_FAILED.to_owned());
                    }
                }
            });
        });
    };

    let on_export = move |_| {
        if !results.with_untracked(ResultsState::can_export) {
            return;
        }
        results.update(|r| r.exporting = true);
        match results.with_untracked(|r| export_csv(&r.rows)) {
            Ok(csv) => {
                #[cfg(feature = "hydrate")]
                if let Err(e) = crate::util::download::save_text(EXPORT_FILE_NAME, "text/csv", &csv) {
                    leptos::logging::warn!("export download failed: {e}");
                }
                #[cfg(not(feature = "hydrate"))]
                let _ = (csv, EXPORT_FILE_NAME);
            }
            Err(e) => leptos::logging::warn!("export failed: {e}"),
        }
        results.update(|r| r.exporting = false);
    };

    let summary = move || results.with(ResultsState::summary);
    let rows = move || results.with(|r| r.rows.clone());

    view! {
        <div class="page matching-results">
            <header class="page__header">
                <div>
                    <h1>"Matching Results"</h1>
                    <p class="page__subtitle">"View and analyze job-consultant matching results"</p>
                </div>
                <button
                    class="btn btn--primary"
                    on:click=on_export
                    disabled=move || !results.with(ResultsState::can_export)
                >
                    {move || if results.with(|r| r.exporting) { "Exporting..." } else { "Export Results" }}
                </button>
            </header>

            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-card__label">"Total Matches"</span>
                    <span class="stat-card__value">{move || summary().total}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"High Matches (80%+)"</span>
                    <span class="stat-card__value stat-card__value--success">{move || summary().high}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Medium Matches (60-79%)"</span>
                    <span class="stat-card__value stat-card__value--warning">{move || summary().medium}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Low Matches (<60%)"</span>
                    <span class="stat-card__value stat-card__value--danger">{move || summary().low}</span>
                </div>
            </div>

            <section class="panel">
                <h2 class="panel__title">"Recent Matching Results"</h2>
                {move || {
                    if results.with(|r| r.loading) {
                        view! { <p class="empty-state">"Loading matching results..."</p> }.into_any()
                    } else if results.with(|r| r.rows.is_empty()) {
                        view! { <p class="empty-state">{EMPTY_RESULTS}</p> }.into_any()
                    } else {
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Job Title"</th>
                                        <th>"Top 3 Matches"</th>
                                        <th>"Best Score"</th>
                                        <th>"Status"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=rows
                                        key=|row| (row.job_description_id, row.email_sent)
                                        children=move |row: GroupedResult| {
                                            let id = row.job_description_id;
                                            let best = row.best_score();
                                            let (status_class, status_text) = email_status(row.email_sent);
                                            let preview = row
                                                .top_matches
                                                .iter()
                                                .take(TOP_PREVIEW)
                                                .map(|m| view! {
                                                    <div class="match-preview">
                                                        <span>{m.consultant_name.clone()}</span>
                                                        <span class=ScoreBand::of(m.score).class()>{score_label(m.score)}</span>
                                                    </div>
                                                })
                                                .collect_view();
                                            view! {
                                                <tr>
                                                    <td>
                                                        <div class="table__strong">{row.job_title.clone()}</div>
                                                        <div>{row.department.clone()}</div>
                                                    </td>
                                                    <td>{preview}</td>
                                                    <td><span class=ScoreBand::of(best).class()>{score_label(best)}</span></td>
                                                    <td><span class=status_class>{status_text}</span></td>
                                                    <td class="table__actions">
                                                        <button
                                                            class="btn btn--ghost"
                                                            title="View Details"
                                                            on:click=move |_| results.update(|r| r.select(id))
                                                        >
                                                            "View"
                                                        </button>
                                                        <button
                                                            class="btn btn--ghost"
                                                            title={if row.email_sent { "Email already sent" } else { "Send Email" }}
                                                            disabled=move || !results.with(|r| r.can_send(id))
                                                            on:click=move |_| send_email(id)
                                                        >
                                                            "Email"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        }
                        .into_any()
                    }
                }}
            </section>

            {move || {
                results.with(|r| r.selected_row().cloned()).map(|row| {
                    let id = row.job_description_id;
                    view! {
                        <ResultDetailDialog
                            row=row
                            sending=Signal::derive(move || results.with(|r| r.sending))
                            email_error=Signal::derive(move || results.with(|r| r.email_error.clone()))
                            on_close=Callback::new(move |()| results.update(ResultsState::close))
                            on_send=Callback::new(move |()| send_email(id))
                        />
                    }
                })
            }}
        </div>
    }
}

#[component]
fn ResultDetailDialog(
    row: GroupedResult,
    sending: Signal<bool>,
    email_error: Signal<Option<String>>,
    on_close: Callback<()>,
    on_send: Callback<()>,
) -> impl IntoView {
    let sent = row.email_sent;
    let (status_class, _) = email_status(sent);
    let matches = row
        .top_matches
        .iter()
        .enumerate()
        .map(|(rank, m)| view! { <MatchCard rank={rank + 1} top_match=m.clone()/> })
        .collect_view();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <div>
                        <h2>{row.job_title.clone()}</h2>
                        <p class="dialog__hint">{row.department.clone()}</p>
                    </div>
                    <button class="dialog__close" aria-label="Close" on:click=move |_| on_close.run(())>"x"</button>
                </div>
                <h3>"Top Consultant Matches"</h3>
                <div class="match-list">{matches}</div>
                <div class="dialog__facts">
                    <div>
                        <h4>"Analysis Date"</h4>
                        <p>{format_date(row.created_at.as_deref())}</p>
                    </div>
                    <div>
                        <h4>"Email Status"</h4>
                        <span class=status_class>{if sent { "Sent" } else { "Pending" }}</span>
                    </div>
                </div>
                {move || email_error.get().map(|e| view! { <p class="dialog__danger">{e}</p> })}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                    <button
                        class="btn btn--success"
                        disabled=move || sent || sending.get()
                        on:click=move |_| on_send.run(())
                    >
                        {move || send_button_label(sending.get(), sent)}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MatchCard(rank: usize, top_match: TopMatch) -> impl IntoView {
    let matching = top_match
        .matching_skills
        .iter()
        .map(|s| view! { <span class="chip chip--success">{s.clone()}</span> })
        .collect_view();
    let gap = (!top_match.missing_skills.is_empty()).then(|| {
        let chips = top_match
            .missing_skills
            .iter()
            .map(|s| view! { <span class="chip chip--danger">{s.clone()}</span> })
            .collect_view();
        view! {
            <div>
                <h5>"Skills Gap"</h5>
                <div class="chips">{chips}</div>
            </div>
        }
    });

    view! {
        <div class="match-card">
            <div class="match-card__header">
                <div>
                    <h4>{top_match.consultant_name.clone()}</h4>
                    <p class="match-card__meta">{format!("{} years experience", top_match.experience_text())}</p>
                </div>
                <div class="match-card__score">
                    <span class=ScoreBand::of(top_match.score).class()>
                        {format!("{} Match", score_label(top_match.score))}
                    </span>
                    <span class="match-card__rank">{format!("Rank #{rank}")}</span>
                </div>
            </div>
            <h5>"Matching Skills"</h5>
            <div class="chips">{matching}</div>
            {gap}
            {top_match.llm_reasoning.clone().map(|r| view! { <p class="match-card__reasoning">{r}</p> })}
        </div>
    }
}
