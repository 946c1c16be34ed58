pub mod config;
pub mod credential;
pub mod parse;
pub mod run;
pub mod submit;

// Re-export the public surface at crate root for convenience
pub use config::SubmitTarget;
pub use credential::{Credential, CredentialError, MIN_TOKEN_LEN, TOKEN_ENV_VAR};
pub use parse::{IssueRecord, parse_document};
pub use run::{RunSummary, preview, submit_all};
pub use submit::{CreatedIssue, SubmissionError, Submitter, compose_body};
