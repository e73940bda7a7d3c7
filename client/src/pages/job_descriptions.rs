//! Job description management: table, detail dialog, upload, and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads jobs from the shared catalog and refreshes it after every mutation.
//! Uploaded source documents are listed separately from the parsed jobs.

#[cfg(test)]
#[path = "job_descriptions_test.rs"]
mod job_descriptions_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::catalog_notice::CatalogErrorNotice;
use crate::components::upload_modal::{UploadModal, UploadTarget};
use crate::net::api;
use crate::net::types::{JobDescription, JobDocument};
use crate::state::catalog::CatalogState;
use crate::state::matching::MatchingState;
use crate::util::format::{format_date, job_status_class, overflow_label, skill_preview};
use crate::util::refresh::refresh_jobs;

/// Skills shown per row before "+N more".
const SKILL_PREVIEW: usize = 4;

/// File name portion of a stored document path.
pub fn document_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

pub fn experience_label(years: i64) -> String {
    match years {
        1 => "1 year experience".to_owned(),
        n => format!("{n} years experience"),
    }
}

#[component]
pub fn JobDescriptionsPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let matching = expect_context::<RwSignal<MatchingState>>();
    let navigate = use_navigate();

    let viewing = RwSignal::new(None::<i64>);
    let deleting = RwSignal::new(None::<i64>);
    let show_upload = RwSignal::new(false);
    let documents = RwSignal::new(Vec::<JobDocument>::new());
    let error = RwSignal::new(None::<String>);

    let load_documents = move || {
        leptos::task::spawn_local(async move {
            match api::list_uploaded_job_descriptions().await {
                Ok(docs) => documents.set(docs),
                Err(e) => leptos::logging::warn!("failed to list uploaded documents: {e}"),
            }
        });
    };
    Effect::new(load_documents);

    let on_uploaded = Callback::new(move |()| {
        refresh_jobs(catalog);
        load_documents();
    });
    let on_close_upload = Callback::new(move |()| show_upload.set(false));

    let on_confirm_delete = Callback::new(move |()| {
        let Some(job_id) = deleting.get_untracked() else {
            return;
        };
        deleting.set(None);
        leptos::task::spawn_local(async move {
            match api::delete_job(job_id).await {
                Ok(()) => {
                    error.set(None);
                    if viewing.get_untracked() == Some(job_id) {
                        viewing.set(None);
                    }
                    refresh_jobs(catalog);
                }
                Err(e) => {
                    leptos::logging::warn!("failed to delete job {job_id}: {e}");
                    error.set(Some(format!("Failed to delete job: {e}")));
                }
            }
        });
    });

    let start_requested = RwSignal::new(false);
    let on_start_matching = Callback::new(move |job_id: i64| {
        matching.update(|m| m.selected_job_id = Some(job_id));
        viewing.set(None);
        start_requested.set(true);
    });
    Effect::new(move || {
        if start_requested.get() {
            start_requested.set(false);
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    let viewed_job = move || viewing.get().and_then(|id| catalog.with(|c| c.job(id).cloned()));
    let deleting_title = move || {
        deleting
            .get()
            .and_then(|id| catalog.with(|c| c.job(id).map(|j| j.title.clone())))
            .unwrap_or_default()
    };

    view! {
        <div class="page job-descriptions">
            <header class="page__header">
                <div>
                    <h1>"Job Descriptions"</h1>
                    <p class="page__subtitle">"Manage and view all job descriptions"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| show_upload.set(true)>
                    "Upload Job Description"
                </button>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="notice notice--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <CatalogErrorNotice/>

            <section class="panel">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Job Details"</th>
                            <th>"Requirements"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || catalog.with(|c| c.jobs.clone())
                            key=|job| (job.id, job.status.clone())
                            children=move |job: JobDescription| {
                                let id = job.id;
                                let (shown, hidden) = skill_preview(&job.skills, SKILL_PREVIEW);
                                let chips = shown
                                    .iter()
                                    .map(|s| view! { <span class="chip">{s.clone()}</span> })
                                    .collect_view();
                                view! {
                                    <tr>
                                        <td>
                                            <div class="table__strong">{job.title.clone()}</div>
                                            <div>{job.department.clone()}</div>
                                            <div class="table__muted">{experience_label(job.experience_required)}</div>
                                        </td>
                                        <td>
                                            <div class="chips">
                                                {chips}
                                                {overflow_label(hidden).map(|l| view! { <span class="chips__more">{l}</span> })}
                                            </div>
                                        </td>
                                        <td><span class=job_status_class(&job.status)>{job.status.clone()}</span></td>
                                        <td class="table__actions">
                                            <button class="btn btn--ghost" on:click=move |_| viewing.set(Some(id))>
                                                "View"
                                            </button>
                                            <button class="btn btn--ghost btn--danger" on:click=move |_| deleting.set(Some(id))>
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || catalog.with(CatalogState::no_jobs_yet)>
                    <p class="empty-state">"No job descriptions yet. Upload one to get started."</p>
                </Show>
            </section>

            <section class="panel">
                <h2 class="panel__title">"Uploaded Documents"</h2>
                <Show
                    when=move || documents.with(|d| !d.is_empty())
                    fallback=|| view! { <p class="empty-state">"No documents uploaded."</p> }
                >
                    <ul class="documents">
                        <For
                            each=move || documents.get()
                            key=|doc| doc.id
                            children=move |doc: JobDocument| {
                                view! {
                                    <li class="documents__item">
                                        <span class="documents__name">{document_name(&doc.document_path).to_owned()}</span>
                                        <span class="documents__date">{format_date(doc.created_at.as_deref())}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </section>

            {move || viewed_job().map(|job| view! {
                <JobDetailDialog
                    job=job
                    on_close=Callback::new(move |()| viewing.set(None))
                    on_start=on_start_matching
                />
            })}

            <Show when=move || deleting.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| deleting.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Delete Job"</h2>
                        <p class="dialog__danger">
                            {move || format!("Delete \"{}\"? This cannot be undone.", deleting_title())}
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| deleting.set(None)>
                                "Cancel"
                            </button>
                            <button class="btn btn--danger" on:click=move |_| on_confirm_delete.run(())>
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || show_upload.get()>
                <UploadModal
                    target=UploadTarget::JobDescription
                    on_close=on_close_upload
                    on_uploaded=on_uploaded
                />
            </Show>
        </div>
    }
}

#[component]
fn JobDetailDialog(job: JobDescription, on_close: Callback<()>, on_start: Callback<i64>) -> impl IntoView {
    let id = job.id;
    let skills = job
        .skills
        .iter()
        .map(|s| view! { <span class="chip chip--lg">{s.clone()}</span> })
        .collect_view();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <div>
                        <h2>{job.title.clone()}</h2>
                        <p class="dialog__hint">{job.department.clone()}</p>
                    </div>
                    <button class="dialog__close" on:click=move |_| on_close.run(()) title="Close">"x"</button>
                </div>
                <h3>"Job Description"</h3>
                <p class="dialog__body">{job.description.clone()}</p>
                <h3>"Required Skills"</h3>
                <div class="chips">{skills}</div>
                <div class="dialog__facts">
                    <div>
                        <h4>"Experience Required"</h4>
                        <p>{format!("{} years", job.experience_required)}</p>
                    </div>
                    <div>
                        <h4>"Status"</h4>
                        <span class=job_status_class(&job.status)>{job.status.clone()}</span>
                    </div>
                    <div>
                        <h4>"Created"</h4>
                        <p>{format_date(job.created_at.as_deref())}</p>
                    </div>
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_start.run(id)>
                        "Start Matching"
                    </button>
                </div>
            </div>
        </div>
    }
}
