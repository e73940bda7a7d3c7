//! REST API helpers for the recruiting backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! session token attached as a bearer header.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; non-2xx responses carry the
//! backend's `detail` text so pages can show it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    AgentStatus, ConsultantProfile, GroupedResult, JobDescription, JobDocument, MatchingResult, RegisterRequest,
    Token, User,
};
use crate::util::files::SelectedFile;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorDetail;

pub(crate) const AUTH_TOKEN_PATH: &str = "/auth/token";
pub(crate) const AUTH_REGISTER_PATH: &str = "/auth/register";
pub(crate) const AUTH_ME_PATH: &str = "/auth/me";
pub(crate) const JOBS_PATH: &str = "/jobs";
pub(crate) const JOB_DOCUMENTS_PATH: &str = "/jobs/job-descriptions/";
pub(crate) const JOB_UPLOAD_PATH: &str = "/jobs/upload";
pub(crate) const CONSULTANTS_PATH: &str = "/consultants";
pub(crate) const CONSULTANT_UPLOAD_PATH: &str = "/consultants/upload";
pub(crate) const CONSULTANT_SEARCH_PATH: &str = "/consultants/search";
pub(crate) const GROUPED_RESULTS_PATH: &str = "/consultants/matching-results/grouped";
pub(crate) const NOTIFY_MATCHES_PATH: &str = "/consultants/notify-matches";
pub(crate) const MATCHING_RESULTS_PATH: &str = "/matching/results";

#[cfg(any(test, feature = "hydrate"))]
fn job_endpoint(job_id: i64) -> String {
    format!("{JOBS_PATH}/{job_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn matching_start_endpoint(job_id: i64) -> String {
    format!("/matching/start/{job_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn matching_status_endpoint(job_id: i64) -> String {
    format!("/matching/status/{job_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn send_matching_email_endpoint(job_description_id: i64) -> String {
    format!("/consultants/send-matching-email/{job_description_id}")
}

/// Extract a human message from a FastAPI-style error body.
#[cfg(any(test, feature = "hydrate"))]
fn parse_error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorDetail>(body).ok()?.message()
}

/// Grouped results arrive as a bare array; anything else is treated as empty.
#[cfg(any(test, feature = "hydrate"))]
fn parse_grouped_results(body: &str) -> Result<Vec<GroupedResult>, ApiError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !value.is_array() {
        return Ok(Vec::new());
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use super::{ApiError, parse_error_detail};
    use crate::net::config::{api_base, endpoint};
    use crate::util::session;

    pub(super) fn url(path: &str) -> String {
        endpoint(&api_base(), path)
    }

    pub(super) fn authorized(builder: RequestBuilder) -> RequestBuilder {
        match session::load_token() {
            Some(token) => builder.header("Authorization", &session::bearer(&token)),
            None => builder,
        }
    }

    pub(super) fn get(path: &str) -> RequestBuilder {
        authorized(Request::get(&url(path)))
    }

    pub(super) fn post(path: &str) -> RequestBuilder {
        authorized(Request::post(&url(path)))
    }

    pub(super) fn delete(path: &str) -> RequestBuilder {
        authorized(Request::delete(&url(path)))
    }

    pub(super) fn network(e: gloo_net::Error) -> ApiError {
        ApiError::Network(e.to_string())
    }

    pub(super) async fn error_from(resp: Response) -> ApiError {
        let status = resp.status();
        let detail = resp.text().await.ok().and_then(|body| parse_error_detail(&body));
        ApiError::from_status(status, detail)
    }

    pub(super) async fn expect_ok(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() { Ok(resp) } else { Err(error_from(resp).await) }
    }

    pub(super) async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let resp = expect_ok(resp).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        let resp = get(path).send().await.map_err(network)?;
        read_json(resp).await
    }

    pub(super) async fn post_empty(path: &str) -> Result<serde_json::Value, ApiError> {
        let resp = post(path).send().await.map_err(network)?;
        let resp = expect_ok(resp).await?;
        // Some endpoints reply 200 with an empty body.
        let body = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) async fn upload(path: &str, file: &web_sys::File) -> Result<serde_json::Value, ApiError> {
        let form = web_sys::FormData::new().map_err(|_| ApiError::Decode("form data unavailable".to_owned()))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|_| ApiError::Decode("could not attach file".to_owned()))?;
        let resp = post(path)
            .body(form)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Exchange credentials for a bearer token via `POST /auth/token`.
///
/// The backend expects an OAuth2 password form, so the email goes in `username`.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] for bad credentials, or a transport error.
pub async fn login(email: &str, password: &str) -> Result<Token, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::UrlSearchParams::new().map_err(|_| ApiError::Decode("form unavailable".to_owned()))?;
        form.append("username", email);
        form.append("password", password);
        let resp = gloo_net::http::Request::post(&transport::url(AUTH_TOKEN_PATH))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form)
            .map_err(transport::network)?
            .send()
            .await
            .map_err(transport::network)?;
        transport::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, AUTH_TOKEN_PATH);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Returns the backend's rejection (e.g. duplicate email) or a transport error.
pub async fn register(request: &RegisterRequest) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&transport::url(AUTH_REGISTER_PATH))
            .json(request)
            .map_err(transport::network)?
            .send()
            .await
            .map_err(transport::network)?;
        transport::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, AUTH_REGISTER_PATH);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the account behind the stored token from `GET /auth/me`.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] when the token is missing or expired.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::get_json(AUTH_ME_PATH).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = AUTH_ME_PATH;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// JOBS
// =============================================================================

/// List job descriptions from `GET /jobs`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx response.
pub async fn list_jobs() -> Result<Vec<JobDescription>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::get_json(JOBS_PATH).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = JOBS_PATH;
        Err(ApiError::Unavailable)
    }
}

/// List uploaded job description documents from `GET /jobs/job-descriptions/`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx response.
pub async fn list_uploaded_job_descriptions() -> Result<Vec<JobDocument>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::get_json(JOB_DOCUMENTS_PATH).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = JOB_DOCUMENTS_PATH;
        Err(ApiError::Unavailable)
    }
}

/// Upload a job description document via multipart `POST /jobs/upload`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx response.
pub async fn upload_job_description(file: &SelectedFile) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::upload(JOB_UPLOAD_PATH, &file.handle).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (file, JOB_UPLOAD_PATH);
        Err(ApiError::Unavailable)
    }
}

/// Delete a job via `DELETE /jobs/{id}`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx response.
pub async fn delete_job(job_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::delete(&job_endpoint(job_id))
            .send()
            .await
            .map_err(transport::network)?;
        transport::expect_ok(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job_id;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// CONSULTANTS
// =============================================================================

/// List consultant profiles from `GET /consultants`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx response.
pub async fn list_consultants() -> Result<Vec<ConsultantProfile>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::get_json(CONSULTANTS_PATH).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = CONSULTANTS_PATH;
        Err(ApiError::Unavailable)
    }
}

/// Upload a consultant profile document via multipart `POST /consultants/upload`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx response.
pub async fn upload_consultant_profile(file: &SelectedFile) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::upload(CONSULTANT_UPLOAD_PATH, &file.handle).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (file, CONSULTANT_UPLOAD_PATH);
        Err(ApiError::Unavailable)
    }
}

/// Server-side consultant search via `GET /consultants/search?query=...`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx response.
pub async fn search_consultants(query: &str) -> Result<Vec<ConsultantProfile>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::get(CONSULTANT_SEARCH_PATH)
            .query([("query", query)])
            .send()
            .await
            .map_err(transport::network)?;
        transport::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (query, CONSULTANT_SEARCH_PATH);
        Err(ApiError::Unavailable)
    }
}

/// Fetch per-job grouped results from `GET /consultants/matching-results/grouped`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx response. A non-array
/// body is not an error; it yields an empty list.
pub async fn fetch_grouped_results() -> Result<Vec<GroupedResult>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::get(GROUPED_RESULTS_PATH)
            .send()
            .await
            .map_err(transport::network)?;
        let resp = transport::expect_ok(resp).await?;
        let body = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        parse_grouped_results(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = GROUPED_RESULTS_PATH;
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend to email all pending matches via `POST /consultants/notify-matches`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx response.
pub async fn notify_matches() -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::post_empty(NOTIFY_MATCHES_PATH).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = NOTIFY_MATCHES_PATH;
        Err(ApiError::Unavailable)
    }
}

/// Email the matches for one job via `POST /consultants/send-matching-email/{id}`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx response.
pub async fn send_matching_email(job_description_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::post_empty(&send_matching_email_endpoint(job_description_id))
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job_description_id;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// MATCHING
// =============================================================================

/// Kick off the agent pipeline for a job via `POST /matching/start/{id}`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx response.
pub async fn start_matching(job_id: i64) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::post_empty(&matching_start_endpoint(job_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job_id;
        Err(ApiError::Unavailable)
    }
}

/// Poll agent progress for a job from `GET /matching/status/{id}`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx response.
pub async fn fetch_matching_status(job_id: i64) -> Result<AgentStatus, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::get_json(&matching_status_endpoint(job_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job_id;
        Err(ApiError::Unavailable)
    }
}

/// List flat matching results from `GET /matching/results`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx response.
pub async fn fetch_matching_results() -> Result<Vec<MatchingResult>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::get_json(MATCHING_RESULTS_PATH).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = MATCHING_RESULTS_PATH;
        Err(ApiError::Unavailable)
    }
}
