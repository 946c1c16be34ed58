//! Sequential run loop: one submission per record, in document order.

use tracing::warn;

use crate::{
	credential::Credential,
	parse::IssueRecord,
	submit::{Submitter, compose_body},
};

/// Outcome counts for one run. A failed submission still counts as attempted;
/// it never aborts the remaining records.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RunSummary {
	pub created: usize,
	pub attempted: usize,
}

/// Submit every record once, printing one status line per attempt.
pub fn submit_all(submitter: &Submitter, records: &[IssueRecord], credential: &Credential) -> RunSummary {
	let attempted = records.len();
	let mut created = 0;

	for (i, record) in records.iter().enumerate() {
		println!("Creating issue {}/{}: {}", i + 1, attempted, record.title);
		match submitter.submit(record, credential) {
			Ok(url) => {
				created += 1;
				println!("  created: {url}");
			}
			Err(e) => {
				warn!(title = %record.title, "submission failed: {e}");
				println!("  failed: {e}");
			}
		}
	}

	RunSummary { created, attempted }
}

/// Print what a run would submit, without any network activity.
pub fn preview(records: &[IssueRecord]) {
	for (i, record) in records.iter().enumerate() {
		println!("[{}] {}", i + 1, record.title);
		if let Some(kind) = &record.kind {
			println!("    type: {kind}");
		}
		if let Some(priority) = &record.priority {
			println!("    priority: {priority}");
		}
		if !record.labels.is_empty() {
			println!("    labels: {}", record.labels.join(", "));
		}
		let body = compose_body(record);
		if !body.is_empty() {
			println!("    body:");
			for line in body.lines() {
				println!("      {line}");
			}
		}
	}
	println!("{} issue(s) would be created", records.len());
}
