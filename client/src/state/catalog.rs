//! Shared job and consultant inventory.
//!
//! DESIGN
//! ======
//! Jobs, consultants, and flat matching results are loaded once when the app
//! mounts and refreshed after mutations. Filtering is pure so every list view
//! (recruiter console, profiles grid) applies identical rules.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::{ConsultantProfile, JobDescription, MatchingResult};

/// Inventory loaded from `/jobs`, `/consultants`, and `/matching/results`.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub jobs: Vec<JobDescription>,
    pub consultants: Vec<ConsultantProfile>,
    pub results: Vec<MatchingResult>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CatalogState {
    #[must_use]
    pub fn job(&self, id: i64) -> Option<&JobDescription> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// `true` when the job list is settled empty: loaded without error.
    #[must_use]
    pub fn no_jobs_yet(&self) -> bool {
        self.jobs.is_empty() && !self.loading && self.error.is_none()
    }

    /// Matching runs whose results were not yet emailed out.
    #[must_use]
    pub fn pending_reviews(&self) -> usize {
        self.results.iter().filter(|r| !r.email_sent).count()
    }

    /// Headline counts for the recruiter console.
    #[must_use]
    pub fn metrics(&self) -> CatalogMetrics {
        CatalogMetrics {
            total_jobs: self.jobs.len(),
            active_matching: self.jobs.iter().filter(|j| j.status == "matching").count(),
            completed_jobs: self.jobs.iter().filter(|j| j.status == "completed").count(),
            total_consultants: self.consultants.len(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatalogMetrics {
    pub total_jobs: usize,
    pub active_matching: usize,
    pub completed_jobs: usize,
    pub total_consultants: usize,
}

/// Status filter choices on the recruiter console.
pub const JOB_STATUS_FILTERS: [(&str, &str); 4] =
    [("all", "All Status"), ("active", "Active"), ("matching", "Matching"), ("completed", "Completed")];

/// Case-insensitive match against `title` or any skill.
fn job_matches_term(job: &JobDescription, term: &str) -> bool {
    job.title.to_lowercase().contains(term) || job.skills.iter().any(|s| s.to_lowercase().contains(term))
}

/// Jobs whose title or skills contain `term` and whose status equals `status`
/// (`"all"` disables the status check).
pub fn filter_jobs<'a>(jobs: &'a [JobDescription], term: &str, status: &str) -> Vec<&'a JobDescription> {
    let term = term.trim().to_lowercase();
    jobs.iter()
        .filter(|job| job_matches_term(job, &term))
        .filter(|job| status == "all" || job.status == status)
        .collect()
}

/// Experience bands used by the consultant filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExperienceBand {
    #[default]
    All,
    /// Under 3 years.
    Junior,
    /// 3 to 6 years.
    Mid,
    /// 7 years or more.
    Senior,
}

impl ExperienceBand {
    pub const ALL: [Self; 4] = [Self::All, Self::Junior, Self::Mid, Self::Senior];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Junior => "junior",
            Self::Mid => "mid",
            Self::Senior => "senior",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Experience",
            Self::Junior => "Junior (0-2 years)",
            Self::Mid => "Mid (3-6 years)",
            Self::Senior => "Senior (7+ years)",
        }
    }

    /// Parse a `<select>` value; unknown values mean no filtering.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "junior" => Self::Junior,
            "mid" => Self::Mid,
            "senior" => Self::Senior,
            _ => Self::All,
        }
    }

    #[must_use]
    pub fn contains(self, years: i64) -> bool {
        match self {
            Self::All => true,
            Self::Junior => years < 3,
            Self::Mid => (3..7).contains(&years),
            Self::Senior => years >= 7,
        }
    }
}

/// Consultants whose name or skills contain `term` and whose experience falls in `band`.
pub fn filter_consultants<'a>(
    consultants: &'a [ConsultantProfile],
    term: &str,
    band: ExperienceBand,
) -> Vec<&'a ConsultantProfile> {
    let term = term.trim().to_lowercase();
    consultants
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&term) || c.skills.iter().any(|s| s.to_lowercase().contains(&term)))
        .filter(|c| band.contains(c.experience))
        .collect()
}

/// CSV report of the given jobs, one row per job.
///
/// # Errors
///
/// Returns an error if the CSV writer fails to serialize a row.
pub fn jobs_report_csv(jobs: &[&JobDescription]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Job Title", "Department", "Skills Required", "Experience", "Status", "Created"])?;
    for job in jobs {
        let skills = job.skills.join("; ");
        let experience = job.experience_required.to_string();
        writer.write_record([
            job.title.as_str(),
            job.department.as_str(),
            skills.as_str(),
            experience.as_str(),
            job.status.as_str(),
            job.created_at.as_deref().unwrap_or_default(),
        ])?;
    }
    let bytes = writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
