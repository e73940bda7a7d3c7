//! Small display formatting helpers shared by pages and components.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Upper-case initials of each word in a name, e.g. `"Ana María Silva"` -> `"AMS"`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Date portion of an ISO-8601 timestamp, or `-` when absent.
pub fn format_date(timestamp: Option<&str>) -> String {
    match timestamp.map(str::trim) {
        Some(ts) if !ts.is_empty() => ts.split(['T', ' ']).next().unwrap_or(ts).to_owned(),
        _ => "-".to_owned(),
    }
}

/// First `limit` skills plus the count of hidden ones.
pub fn skill_preview(skills: &[String], limit: usize) -> (&[String], usize) {
    let shown = &skills[..skills.len().min(limit)];
    (shown, skills.len() - shown.len())
}

/// `"+N more"` label for hidden skills, or `None` when everything fits.
pub fn overflow_label(hidden: usize) -> Option<String> {
    (hidden > 0).then(|| format!("+{hidden} more"))
}

/// Badge class for a job status.
pub fn job_status_class(status: &str) -> &'static str {
    match status {
        "completed" => "badge badge--success",
        "matching" => "badge badge--warning",
        "in-progress" => "badge badge--info",
        _ => "badge badge--neutral",
    }
}

/// Badge class for consultant availability.
pub fn availability_class(availability: &str) -> &'static str {
    match availability {
        "available" => "badge badge--success",
        "busy" => "badge badge--warning",
        _ => "badge badge--danger",
    }
}

/// Fallback text for consultants without a bio.
pub const DEFAULT_BIO: &str = "Experienced professional with strong technical background.";

pub fn bio_or_default(bio: Option<&str>) -> &str {
    match bio {
        Some(text) if !text.trim().is_empty() => text,
        _ => DEFAULT_BIO,
    }
}
