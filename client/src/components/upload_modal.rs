//! Document upload dialog shared by the job and consultant pages.
//!
//! DESIGN
//! ======
//! One file at a time, picked or dropped. The browser `File` handle is not
//! `Send`, so the selection lives in a local signal. Inputs lock while an
//! upload is in flight; success closes the dialog and tells the parent to
//! refresh, failure keeps the selection so the user can retry.

#[cfg(test)]
#[path = "upload_modal_test.rs"]
mod upload_modal_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::util::files::{DOCUMENT_ACCEPT, SelectedFile, is_document};

pub const UNSUPPORTED_FILE: &str = "Please select a PDF or Word document.";

/// What the uploaded document becomes on the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadTarget {
    JobDescription,
    ConsultantProfile,
}

impl UploadTarget {
    pub fn title(self) -> &'static str {
        match self {
            Self::JobDescription => "Upload Job Description",
            Self::ConsultantProfile => "Upload Consultant Profile",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Self::JobDescription => "The document is parsed into a job description and queued for matching.",
            Self::ConsultantProfile => "The CV is parsed into a consultant profile with skills and experience.",
        }
    }

    async fn upload(self, file: &SelectedFile) -> Result<(), ApiError> {
        match self {
            Self::JobDescription => api::upload_job_description(file).await.map(|_| ()),
            Self::ConsultantProfile => api::upload_consultant_profile(file).await.map(|_| ()),
        }
    }
}

/// Message shown when the backend rejects an upload.
pub fn upload_failed_message(detail: &str) -> String {
    format!("Upload failed: {detail}")
}

#[component]
pub fn UploadModal(target: UploadTarget, on_close: Callback<()>, on_uploaded: Callback<()>) -> impl IntoView {
    let selected = RwSignal::new_local(None::<SelectedFile>);
    let dragging = RwSignal::new(false);
    let uploading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let choose = move |file: Option<SelectedFile>| match file {
        Some(file) if !is_document(&file.name) => error.set(Some(UNSUPPORTED_FILE.to_owned())),
        Some(file) => {
            error.set(None);
            selected.set(Some(file));
        }
        None => {}
    };

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            choose(crate::util::files::first_file(input.files()));
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, choose);
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        if !uploading.get_untracked() {
            dragging.set(true);
        }
    };
    let on_drag_leave = move |_: leptos::ev::DragEvent| dragging.set(false);
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        if uploading.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        choose(crate::util::files::first_file(ev.data_transfer().and_then(|dt| dt.files())));
    };

    let on_remove = move |_| {
        selected.set(None);
        error.set(None);
    };

    let on_preview = move |_| {
        #[cfg(feature = "hydrate")]
        selected.with_untracked(|file| {
            if let Some(file) = file {
                if let Err(e) = crate::util::download::open_preview(&file.handle) {
                    leptos::logging::warn!("preview failed: {e}");
                }
            }
        });
    };

    let on_upload = move |_| {
        if uploading.get_untracked() {
            return;
        }
        let Some(file) = selected.get_untracked() else {
            return;
        };
        uploading.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            let result = target.upload(&file).await;
            uploading.set(false);
            match result {
                Ok(()) => {
                    selected.set(None);
                    on_uploaded.run(());
                    on_close.run(());
                }
                Err(e) => {
                    leptos::logging::warn!("upload failed: {e}");
                    error.set(Some(upload_failed_message(&e.to_string())));
                }
            }
        });
    };

    let on_cancel = move || {
        if !uploading.get_untracked() {
            on_close.run(());
        }
    };

    let file_name = move || selected.with(|f| f.as_ref().map(|f| f.name.clone()).unwrap_or_default());
    let file_size = move || selected.with(|f| f.as_ref().map(SelectedFile::size_label).unwrap_or_default());

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel()>
            <div class="dialog dialog--upload" on:click=move |ev| ev.stop_propagation()>
                <h2>{target.title()}</h2>
                <p class="dialog__hint">{target.hint()}</p>
                <Show
                    when=move || selected.with(Option::is_some)
                    fallback=move || {
                        view! {
                            <label
                                class=move || if dragging.get() { "upload-drop upload-drop--active" } else { "upload-drop" }
                                on:dragover=on_drag_over
                                on:dragleave=on_drag_leave
                                on:drop=on_drop
                            >
                                <span class="upload-drop__title">"Drag and drop a file here"</span>
                                <span class="upload-drop__hint">"or click to browse (PDF, DOC, DOCX)"</span>
                                <input
                                    class="upload-drop__input"
                                    type="file"
                                    accept=DOCUMENT_ACCEPT
                                    disabled=move || uploading.get()
                                    on:change=on_change
                                />
                            </label>
                        }
                    }
                >
                    <div class="upload-file">
                        <span class="upload-file__name">{file_name}</span>
                        <span class="upload-file__size">{file_size}</span>
                        <button class="btn" on:click=on_preview disabled=move || uploading.get()>
                            "Preview"
                        </button>
                        <button class="btn" on:click=on_remove disabled=move || uploading.get()>
                            "Remove"
                        </button>
                    </div>
                </Show>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__danger">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel() disabled=move || uploading.get()>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=on_upload
                        disabled=move || uploading.get() || selected.with(Option::is_none)
                    >
                        {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
