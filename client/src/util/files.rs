//! File selection helpers for the upload modal.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

/// `accept` attribute for document pickers.
pub const DOCUMENT_ACCEPT: &str = ".pdf,.doc,.docx,application/msword,application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const DOCUMENT_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// A file chosen by the user, plus the browser handle needed to upload it.
#[derive(Clone, Debug)]
pub struct SelectedFile {
    pub name: String,
    pub size: f64,
    #[cfg(feature = "hydrate")]
    pub handle: web_sys::File,
}

impl SelectedFile {
    #[cfg(feature = "hydrate")]
    pub fn from_handle(handle: web_sys::File) -> Self {
        Self { name: handle.name(), size: handle.size(), handle }
    }

    /// Human-readable size, e.g. `"1.2 MB"`.
    #[must_use]
    pub fn size_label(&self) -> String {
        format_size(self.size)
    }
}

/// `true` for names ending in a PDF or Word extension (case-insensitive).
pub fn is_document(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| DOCUMENT_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

/// Byte count as B / KB / MB with one decimal above bytes.
pub fn format_size(bytes: f64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    if bytes >= MB {
        format!("{:.1} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{bytes:.0} B")
    }
}

/// First file from a `FileList`, if any.
#[cfg(feature = "hydrate")]
pub fn first_file(files: Option<web_sys::FileList>) -> Option<SelectedFile> {
    files.and_then(|list| list.get(0)).map(SelectedFile::from_handle)
}
