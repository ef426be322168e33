//! Deploy records from the Drone build feed

use serde::{Deserialize, Serialize};

/// One reported execution of a CI pipeline.
///
/// Read-only snapshot of the wire shape returned by
/// `GET /api/user/feed?latest=true`. Each successful fetch replaces the whole
/// list; records are never merged across fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deploy {
    /// Display label (usually the repository name)
    #[serde(default)]
    pub name: String,
    /// Raw status string: "success", "running", or anything else
    #[serde(default)]
    pub status: String,
    /// Build start time in epoch seconds; absent while a build is queued
    pub started_at: Option<i64>,
    /// Build number, used for the detail-page link
    pub number: Option<i64>,
    /// "owner/repo" identifier, used for the detail-page link
    pub full_name: Option<String>,
    /// Commit hash of the built revision
    pub commit: Option<String>,
    /// Branch the build ran against
    pub branch: Option<String>,
    /// Clone URL of the repository remote
    pub remote: Option<String>,
    /// Commit message or build description
    pub message: Option<String>,
}

/// Glyph classification derived from the raw status string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStatus {
    Success,
    Running,
    /// Anything that is neither success nor running renders as a failure
    Failed,
}

impl Deploy {
    pub fn status_kind(&self) -> DeployStatus {
        match self.status.as_str() {
            "success" => DeployStatus::Success,
            "running" => DeployStatus::Running,
            _ => DeployStatus::Failed,
        }
    }

    /// Detail-page URL on the Drone server, when the build has a number.
    pub fn detail_url(&self, drone_url: &str) -> Option<String> {
        match (&self.full_name, self.number) {
            (Some(full_name), Some(number)) => Some(format!(
                "{}/{}/{}",
                drone_url.trim_end_matches('/'),
                full_name,
                number
            )),
            _ => None,
        }
    }

    /// Browse URL for the built branch, derived from the clone remote.
    pub fn branch_url(&self) -> Option<String> {
        let remote = self.remote.as_deref()?;
        let branch = self.branch.as_deref()?;
        let base = remote.strip_suffix(".git").unwrap_or(remote);
        Some(format!("{}/tree/{}", base, branch))
    }

    /// First six characters of the commit hash.
    pub fn short_commit(&self) -> Option<&str> {
        let commit = self.commit.as_deref()?;
        Some(commit.get(..6).unwrap_or(commit))
    }
}

/// Sort deploys newest-first by start time.
///
/// Records without a timestamp sort as the minimum value, so they land at the
/// end. The sort is stable: equal keys keep their server order.
pub fn sort_newest_first(deploys: &mut [Deploy]) {
    deploys.sort_by(|a, b| b.started_at.cmp(&a.started_at));
}
