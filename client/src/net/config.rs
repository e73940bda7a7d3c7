//! Backend base URL discovery.
//!
//! The SSR shell writes the host's configured API base into
//! `<meta name="recruitmatch-api-base">`; the browser reads it back here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when no meta tag is present.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Name of the meta tag carrying the API base.
pub const API_BASE_META: &str = "recruitmatch-api-base";

/// Current backend base URL, without a trailing slash.
pub fn api_base() -> String {
    #[cfg(feature = "hydrate")]
    {
        let from_meta = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| {
                doc.query_selector(&format!("meta[name=\"{API_BASE_META}\"]"))
                    .ok()
                    .flatten()
            })
            .and_then(|el| el.get_attribute("content"));
        normalize_base(from_meta.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        normalize_base(None)
    }
}

/// Trim whitespace and trailing slashes; blank input yields [`DEFAULT_API_BASE`].
pub fn normalize_base(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(base) if !base.is_empty() => base.trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_BASE.to_owned(),
    }
}

/// Join `base` and an API path, tolerating a missing leading slash on `path`.
pub fn endpoint(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
