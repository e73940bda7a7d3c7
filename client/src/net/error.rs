//! Error type for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! `Display` output is what pages show inline, so variants carry the backend's
//! `detail` message when one was returned.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// `401` from the backend; the session token is missing or expired.
    #[error("{0}")]
    Unauthorized(String),
    /// Any other non-2xx response.
    #[error("{detail}")]
    Status { status: u16, detail: String },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser (SSR).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build the error for a non-2xx response, preferring the backend's `detail`.
    #[must_use]
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        let detail = detail.unwrap_or_else(|| status_failed_message(status));
        if status == 401 {
            Self::Unauthorized(detail)
        } else {
            Self::Status { status, detail }
        }
    }

    /// `detail` text when the backend supplied one, else `fallback`.
    ///
    /// Used for forms that show a fixed message for transport failures.
    #[must_use]
    pub fn detail_or(&self, fallback: &str) -> String {
        match self {
            Self::Status { detail, .. } | Self::Unauthorized(detail) => detail.clone(),
            Self::Network(_) | Self::Decode(_) | Self::Unavailable => fallback.to_owned(),
        }
    }
}

pub(crate) fn status_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}
