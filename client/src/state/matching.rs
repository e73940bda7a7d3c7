//! AI matching run state for the AR requestor dashboard.
//!
//! DESIGN
//! ======
//! A run is "active" from the moment `start` is requested until the
//! communication agent reports a terminal phase. The poller only reads
//! [`MatchingState::running`], so stopping is a state transition rather than
//! a timer handle someone has to remember to clear.

#[cfg(test)]
#[path = "matching_test.rs"]
mod matching_test;

use crate::net::types::{AgentPhase, AgentStatus, JobDescription};

/// Poll interval while a matching run is active.
pub const STATUS_POLL_MS: u64 = 2_000;

/// Aggregate phase across all three agents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverallStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Error,
}

impl OverallStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MatchingState {
    pub selected_job_id: Option<i64>,
    pub running: bool,
    pub status: AgentStatus,
    pub error: Option<String>,
}

impl MatchingState {
    /// Select the first job when nothing is selected yet.
    pub fn ensure_selection(&mut self, jobs: &[JobDescription]) {
        if self.selected_job_id.is_none() {
            self.selected_job_id = jobs.first().map(|j| j.id);
        }
    }

    /// Mark a run as requested for the selected job. Returns the job id, or
    /// `None` when nothing is selected or a run is already active.
    pub fn begin(&mut self) -> Option<i64> {
        if self.running {
            return None;
        }
        let job_id = self.selected_job_id?;
        self.running = true;
        self.error = None;
        Some(job_id)
    }

    /// Record a start failure and end the run.
    pub fn fail(&mut self, message: String) {
        self.running = false;
        self.error = Some(message);
    }

    /// Apply a polled status. The run ends once communication is terminal.
    pub fn apply_status(&mut self, status: AgentStatus) {
        self.status = status;
        if status.communication.status.is_terminal() {
            self.running = false;
        }
    }

    /// Mean progress of the three agents, rounded to a whole percent.
    #[must_use]
    pub fn overall_progress(&self) -> u8 {
        let agents = self.status.agents();
        #[allow(clippy::cast_precision_loss)]
        let mean = agents.iter().map(|a| a.progress.clamp(0.0, 100.0)).sum::<f64>() / agents.len() as f64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded = mean.round() as u8;
        rounded
    }

    #[must_use]
    pub fn overall_status(&self) -> OverallStatus {
        let agents = self.status.agents();
        if agents.iter().any(|a| a.status == AgentPhase::Error) {
            OverallStatus::Error
        } else if agents.iter().any(|a| a.status == AgentPhase::InProgress) {
            OverallStatus::InProgress
        } else if agents.iter().all(|a| a.status == AgentPhase::Completed) {
            OverallStatus::Completed
        } else {
            OverallStatus::Pending
        }
    }
}
