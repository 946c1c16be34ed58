//! End-to-end pipeline coverage: document on disk -> parse -> submit loop.

use std::{io::Write as _, time::Duration};

use md2issues::{Credential, SubmitTarget, Submitter, parse_document, submit_all};

/// Three blocks: one well-formed, one missing its title (excluded from the
/// run entirely), one that the server will reject.
pub const DOC: &str = "\
**Title**: Add ghost piece
**Type**: Feature
**Labels**: enhancement

### Description
Show where the current piece will land.
---
**Type**: Bug
**Priority**: High

### Description
This block has no title and must be dropped.
---
**Title**: Fix line-clear flicker
**Labels**: bug

### Problem Statement
Cleared lines flash white for a frame.
---
";

fn credential() -> Credential {
	Credential::from_token("ghp_0123456789abcdefghij".to_string()).unwrap()
}

fn target_for(server: &mockito::Server) -> SubmitTarget {
	SubmitTarget {
		api_root: server.url(),
		owner: "zhefano".to_string(),
		repo: "hellotetris".to_string(),
		timeout: Duration::from_secs(5),
	}
}

#[test]
fn partial_failure_still_counts_every_attempt() {
	let mut server = mockito::Server::new();
	let created = server
		.mock("POST", "/repos/zhefano/hellotetris/issues")
		.match_body(mockito::Matcher::PartialJsonString(r#"{"title": "Add ghost piece"}"#.to_string()))
		.with_status(201)
		.with_body(r#"{"number": 1, "html_url": "https://github.com/zhefano/hellotetris/issues/1"}"#)
		.create();
	let rejected = server
		.mock("POST", "/repos/zhefano/hellotetris/issues")
		.match_body(mockito::Matcher::PartialJsonString(r#"{"title": "Fix line-clear flicker"}"#.to_string()))
		.with_status(500)
		.with_body("server error")
		.create();

	// Round-trip through the filesystem like the binary does.
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(DOC.as_bytes()).unwrap();
	let content = std::fs::read_to_string(file.path()).unwrap();

	let records = parse_document(&content);
	// The title-less block never enters the run.
	assert_eq!(records.len(), 2);

	let submitter = Submitter::new(target_for(&server)).unwrap();
	let summary = submit_all(&submitter, &records, &credential());

	assert_eq!(summary.created, 1);
	assert_eq!(summary.attempted, 2);
	created.assert();
	rejected.assert();
}

#[test]
fn every_titled_block_gets_exactly_one_submission() {
	let mut server = mockito::Server::new();
	// Both blocks succeed; the mock echoes a distinct issue number per title
	// so we can tell the calls apart.
	let first = server
		.mock("POST", "/repos/zhefano/hellotetris/issues")
		.match_body(mockito::Matcher::PartialJsonString(r#"{"title": "Add ghost piece"}"#.to_string()))
		.with_status(201)
		.with_body(r#"{"number": 1, "html_url": "https://github.com/zhefano/hellotetris/issues/1"}"#)
		.create();
	let second = server
		.mock("POST", "/repos/zhefano/hellotetris/issues")
		.match_body(mockito::Matcher::PartialJsonString(r#"{"title": "Fix line-clear flicker"}"#.to_string()))
		.with_status(201)
		.with_body(r#"{"number": 2, "html_url": "https://github.com/zhefano/hellotetris/issues/2"}"#)
		.create();

	let records = parse_document(DOC);
	let submitter = Submitter::new(target_for(&server)).unwrap();
	let summary = submit_all(&submitter, &records, &credential());

	assert_eq!(summary, md2issues::RunSummary { created: 2, attempted: 2 });
	first.assert();
	second.assert();
}

#[test]
fn composed_body_reaches_the_wire() {
	let mut server = mockito::Server::new();
	let mock = server
		.mock("POST", "/repos/zhefano/hellotetris/issues")
		.match_body(mockito::Matcher::PartialJsonString(
			// `"##` inside the JSON collides with one- and two-hash raw string delimiters
			r###"{"body": "## Feature Description\nShow where the current piece will land."}"###.to_string(),
		))
		.with_status(201)
		.with_body(r#"{"number": 1, "html_url": "https://github.com/zhefano/hellotetris/issues/1"}"#)
		.create();

	let records = parse_document(DOC);
	let submitter = Submitter::new(target_for(&server)).unwrap();
	submitter.submit(&records[0], &credential()).unwrap();
	mock.assert();
}

#[test]
fn unreachable_host_fails_every_record_without_aborting() {
	let target = SubmitTarget {
		api_root: "http://127.0.0.1:9".to_string(),
		owner: "zhefano".to_string(),
		repo: "hellotetris".to_string(),
		timeout: Duration::from_secs(2),
	};
	let records = parse_document(DOC);
	let submitter = Submitter::new(target).unwrap();
	let summary = submit_all(&submitter, &records, &credential());

	// Transport failures are per-record, non-fatal: the loop ran to the end.
	assert_eq!(summary, md2issues::RunSummary { created: 0, attempted: 2 });
}
