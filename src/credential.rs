//! Bearer token acquisition and hygiene.
//!
//! The token comes from `GITHUB_TOKEN` or, failing that, an interactive
//! no-echo prompt. It lives in memory for the duration of the run and the
//! backing buffer is zeroed on drop. The zeroing is best-effort hygiene, not
//! a security guarantee: copies made by the HTTP stack are out of our hands.

use std::{env, fmt, mem};

/// Anything shorter than this cannot plausibly be a GitHub token.
/// A sanity check, not a validity check.
pub const MIN_TOKEN_LEN: usize = 20;

pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
	#[error("no credential provided. Set {TOKEN_ENV_VAR} or enter a token at the prompt")]
	Missing,
	#[error("credential is too short to be a GitHub token ({len} chars, expected at least {})", MIN_TOKEN_LEN)]
	TooShort { len: usize },
	#[error("failed to read token from terminal: {0}")]
	Prompt(#[from] dialoguer::Error),
}

/// An opaque bearer token. Never logged, never persisted.
pub struct Credential(String);

impl Credential {
	/// Resolve the token: the environment variable wins, otherwise prompt
	/// interactively without echoing input.
	pub fn resolve() -> Result<Self, CredentialError> {
		match env::var(TOKEN_ENV_VAR) {
			Ok(token) if !token.trim().is_empty() => Self::from_token(token),
			_ => Self::prompt(),
		}
	}

	pub fn from_token(token: String) -> Result<Self, CredentialError> {
		let token = token.trim().to_string();
		if token.is_empty() {
			return Err(CredentialError::Missing);
		}
		if token.len() < MIN_TOKEN_LEN {
			return Err(CredentialError::TooShort { len: token.len() });
		}
		Ok(Self(token))
	}

	fn prompt() -> Result<Self, CredentialError> {
		let token = dialoguer::Password::new().with_prompt("GitHub token").allow_empty_password(true).interact()?;
		Self::from_token(token)
	}

	pub fn expose(&self) -> &str {
		&self.0
	}
}

impl fmt::Debug for Credential {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Credential(<redacted>)")
	}
}

impl Drop for Credential {
	fn drop(&mut self) {
		// Zero the buffer in place. `into_bytes` keeps the same allocation,
		// so this overwrites the actual token bytes before they are freed.
		mem::take(&mut self.0).into_bytes().fill(0);
	}
}
