//! Wire DTOs for the recruiting backend's REST API.
//!
//! DESIGN
//! ======
//! The backend is loose about shapes: arrays arrive as `null`, ids come back
//! as `job_id` on one endpoint and `id` on another, and scores flip between
//! integers and floats. Decoding absorbs that here so pages can treat every
//! record as well-formed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};

/// Account role as reported by `/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    ArRequestor,
    Recruiter,
    Other(String),
}

impl Role {
    /// Landing route for this role.
    #[must_use]
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Self::ArRequestor => "/ar-dashboard",
            Self::Recruiter => "/recruiter-dashboard",
            // Neither role dashboard admits other roles; `/dashboard` is unguarded.
            Self::Other(_) => "/dashboard",
        }
    }

    /// Wire name (`ar_requestor`, `recruiter`, ...).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ArRequestor => "ar_requestor",
            Self::Recruiter => "recruiter",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "ar_requestor" => Self::ArRequestor,
            "recruiter" => Self::Recruiter,
            _ => Self::Other(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

/// The signed-in account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub email: String,
    #[serde(default, alias = "fullname", alias = "fullName")]
    pub full_name: Option<String>,
    #[serde(default = "default_role")]
    pub role: Role,
}

fn default_role() -> Role {
    Role::Recruiter
}

impl User {
    /// Full name when present, else the local part of the email address.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.full_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => self
                .email
                .split('@')
                .next()
                .unwrap_or_default()
                .to_owned(),
        }
    }
}

/// Bearer token issued by `POST /auth/token`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// Payload for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: String,
}

/// A job description record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobDescription {
    #[serde(alias = "job_id", deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_vec_lenient")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub experience_required: i64,
    #[serde(default = "default_job_status")]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_job_status() -> String {
    "active".to_owned()
}

/// An uploaded job description document, as listed by `/jobs/job-descriptions/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobDocument {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(default)]
    pub document_path: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A consultant profile record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsultantProfile {
    #[serde(alias = "consultant_id", deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_vec_lenient")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub experience: i64,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default = "default_availability")]
    pub availability: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_availability() -> String {
    "available".to_owned()
}

/// One ranked consultant inside a matching result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopMatch {
    #[serde(default)]
    pub consultant_name: String,
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub score: f64,
    #[serde(default)]
    pub experience: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "deserialize_vec_lenient")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_vec_lenient")]
    pub matching_skills: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_vec_lenient")]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub llm_reasoning: Option<String>,
}

impl TopMatch {
    /// Experience rendered as text; the backend sends either a number or a string.
    #[must_use]
    pub fn experience_text(&self) -> String {
        match &self.experience {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }
}

/// Flat matching result from `/matching/results`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchingResult {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub job_id: i64,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub similarity_score: f64,
    #[serde(default, deserialize_with = "deserialize_vec_lenient")]
    pub top_matches: Vec<TopMatch>,
    #[serde(default)]
    pub email_sent: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Per-job result group from `/consultants/matching-results/grouped`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupedResult {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub job_description_id: i64,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default, deserialize_with = "deserialize_vec_lenient")]
    pub top_matches: Vec<TopMatch>,
    #[serde(default)]
    pub email_sent: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl GroupedResult {
    /// Score of the first-ranked match, or `0` with no matches.
    #[must_use]
    pub fn best_score(&self) -> f64 {
        self.top_matches.first().map_or(0.0, |m| m.score)
    }
}

/// Lifecycle phase of one backend agent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AgentPhase {
    #[default]
    Idle,
    Pending,
    InProgress,
    Completed,
    Error,
}

impl AgentPhase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Error => "error",
        }
    }

    /// `true` once the agent will not change phase again.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Error)
    }
}

impl From<String> for AgentPhase {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "idle" => Self::Idle,
            "in-progress" | "in_progress" | "running" => Self::InProgress,
            "completed" | "done" => Self::Completed,
            "error" | "failed" => Self::Error,
            _ => Self::Pending,
        }
    }
}

impl From<AgentPhase> for String {
    fn from(phase: AgentPhase) -> Self {
        phase.as_str().to_owned()
    }
}

/// Phase and percent-complete for a single agent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentProgress {
    #[serde(default)]
    pub status: AgentPhase,
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub progress: f64,
}

/// Status of the three-stage matching pipeline for a job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentStatus {
    #[serde(default)]
    pub comparison: AgentProgress,
    #[serde(default)]
    pub ranking: AgentProgress,
    #[serde(default)]
    pub communication: AgentProgress,
}

impl AgentStatus {
    /// The three agents in pipeline order.
    #[must_use]
    pub fn agents(&self) -> [AgentProgress; 3] {
        [self.comparison, self.ranking, self.communication]
    }
}

/// `{"detail": ...}` error body returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    pub detail: serde_json::Value,
}

impl ErrorDetail {
    /// Text form of `detail`; validation errors arrive as arrays of objects.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Array(items) => items
                .iter()
                .find_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .map(str::to_owned),
            _ => None,
        }
    }
}

/// Treat `null`, a missing value, or any non-array as an empty list.
fn deserialize_vec_lenient<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value).map_err(D::Error::custom),
        _ => Ok(Vec::new()),
    }
}

fn deserialize_f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| D::Error::custom("number out of range")),
        serde_json::Value::String(s) => s
            .trim()
            .trim_end_matches('%')
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid number {s:?}"))),
        serde_json::Value::Null => Ok(0.0),
        other => Err(D::Error::custom(format!("expected number, got {other}"))),
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom(format!("expected integer, got {number}")))
        }
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("invalid integer {s:?}"))),
        serde_json::Value::Null => Ok(0),
        other => Err(D::Error::custom(format!("expected integer, got {other}"))),
    }
}
