//! Grouped matching results for the results viewer.
//!
//! DESIGN
//! ======
//! The detail modal stores only the selected `job_description_id` and reads
//! the row back out of `rows`, so marking an email as sent updates the table
//! and the open modal in one place.

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use crate::net::types::GroupedResult;

/// Message shown when sending a matching email fails.
pub const SEND_EMAIL_FAILED: &str = "Failed to send email. Please try again.";

/// File name used for the CSV export.
pub const EXPORT_FILE_NAME: &str = "matching_results.csv";

const EXPORT_HEADER: [&str; 8] = [
    "Job Title",
    "Department",
    "Consultant Name",
    "Score",
    "Experience",
    "Skills",
    "LLM Reasoning",
    "Email Sent",
];

/// Score band used for badge colours and summary counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    /// 80 and above.
    High,
    /// 60 to 79.
    Medium,
    /// Below 60.
    Low,
}

impl ScoreBand {
    #[must_use]
    pub fn of(score: f64) -> Self {
        if score >= 80.0 {
            Self::High
        } else if score >= 60.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::High => "score score--high",
            Self::Medium => "score score--medium",
            Self::Low => "score score--low",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResultSummary {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Clone, Debug, Default)]
pub struct ResultsState {
    pub rows: Vec<GroupedResult>,
    pub loading: bool,
    pub exporting: bool,
    pub sending: bool,
    pub email_error: Option<String>,
    pub selected: Option<i64>,
}

impl ResultsState {
    /// Counts over every match in every group.
    #[must_use]
    pub fn summary(&self) -> ResultSummary {
        let mut summary = ResultSummary::default();
        for m in self.rows.iter().flat_map(|r| r.top_matches.iter()) {
            summary.total += 1;
            match ScoreBand::of(m.score) {
                ScoreBand::High => summary.high += 1,
                ScoreBand::Medium => summary.medium += 1,
                ScoreBand::Low => summary.low += 1,
            }
        }
        summary
    }

    /// Open the detail modal for a row and clear any stale email error.
    pub fn select(&mut self, job_description_id: i64) {
        self.selected = Some(job_description_id);
        self.email_error = None;
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected_row(&self) -> Option<&GroupedResult> {
        let id = self.selected?;
        self.rows.iter().find(|r| r.job_description_id == id)
    }

    /// Flag a row's email as sent.
    pub fn mark_email_sent(&mut self, job_description_id: i64) {
        for row in self.rows.iter_mut().filter(|r| r.job_description_id == job_description_id) {
            row.email_sent = true;
        }
    }

    /// Whether the send button for a row should be enabled.
    #[must_use]
    pub fn can_send(&self, job_description_id: i64) -> bool {
        !self.sending
            && self
                .rows
                .iter()
                .any(|r| r.job_description_id == job_description_id && !r.email_sent)
    }

    #[must_use]
    pub fn can_export(&self) -> bool {
        !self.exporting && !self.loading && !self.rows.is_empty()
    }
}

/// Format a score as a whole percentage, e.g. `87%`.
#[must_use]
pub fn score_label(score: f64) -> String {
    format!("{score:.0}%")
}

/// Render grouped results as CSV, one line per (job, match) pair.
///
/// # Errors
///
/// Returns an error if the CSV writer fails to serialize a row.
pub fn export_csv(rows: &[GroupedResult]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_HEADER)?;
    for row in rows {
        for m in &row.top_matches {
            let score = format!("{}", m.score);
            let experience = m.experience_text();
            let skills = m.skills.join("; ");
            writer.write_record([
                row.job_title.as_str(),
                row.department.as_str(),
                m.consultant_name.as_str(),
                score.as_str(),
                experience.as_str(),
                skills.as_str(),
                m.llm_reasoning.as_deref().unwrap_or_default(),
                if row.email_sent { "Yes" } else { "No" },
            ])?;
        }
    }
    let bytes = writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
