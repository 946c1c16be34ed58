use std::time::Duration;

/// Where submissions go. Built once at startup from CLI flags and passed into
/// the submitter at construction; there is no process-wide target state.
#[derive(Clone, Debug)]
pub struct SubmitTarget {
	/// API root, e.g. `https://api.github.com`. Overridable so tests can
	/// point at a local mock server.
	pub api_root: String,
	pub owner: String,
	pub repo: String,
	/// Per-request timeout. Each record is attempted exactly once.
	pub timeout: Duration,
}

impl SubmitTarget {
	pub fn issues_url(&self) -> String {
		format!("{}/repos/{}/{}/issues", self.api_root, self.owner, self.repo)
	}
}
