//! Job-list search and scope filtering for the worker dashboard.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use crate::net::types::Job;

/// Listing scope selected in the filter dropdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JobScope {
    #[default]
    All,
    International,
    Local,
}

impl JobScope {
    /// Every scope in dropdown order.
    pub const ALL: [JobScope; 3] = [JobScope::All, JobScope::International, JobScope::Local];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            JobScope::All => "All Jobs",
            JobScope::International => "International",
            JobScope::Local => "Local",
        }
    }

    /// Stable key for `<option value=...>` round-trips.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            JobScope::All => "all",
            JobScope::International => "international",
            JobScope::Local => "local",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "international" => JobScope::International,
            "local" => JobScope::Local,
            _ => JobScope::All,
        }
    }
}

/// Case-insensitive match against title and description, plus scope.
#[must_use]
pub fn job_matches(job: &Job, term: &str, scope: JobScope) -> bool {
    let scope_ok = match scope {
        JobScope::All => true,
        JobScope::International => job.is_international,
        JobScope::Local => !job.is_international,
    };
    if !scope_ok {
        return false;
    }
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    job.title.to_lowercase().contains(&term) || job.description.to_lowercase().contains(&term)
}

/// Filter a fetched listing for display.
#[must_use]
pub fn filter_jobs(jobs: &[Job], term: &str, scope: JobScope) -> Vec<Job> {
    jobs.iter().filter(|job| job_matches(job, term, scope)).cloned().collect()
}
