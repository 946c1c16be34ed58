use std::{
	fs,
	path::{Path, PathBuf},
	time::Duration,
};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr as _, bail};
use md2issues::{Credential, SubmitTarget, Submitter, parse_document, run};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
	/// Path to the issues document
	#[arg(default_value = "ISSUES.md")]
	file: PathBuf,

	/// Repository owner
	#[arg(long, default_value = "zhefano")]
	owner: String,

	/// Repository name
	#[arg(long, default_value = "hellotetris")]
	repo: String,

	/// API root; override to point at a test server
	#[arg(long, default_value = "https://api.github.com")]
	api_root: String,

	/// Per-request timeout in seconds
	#[arg(long, default_value_t = 30)]
	timeout_secs: u64,

	/// Parse and print what would be submitted, without touching the network
	#[arg(long)]
	dry_run: bool,
}

fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	let cli = Cli::parse();

	if cli.dry_run {
		let records = parse_document(&read_document(&cli.file)?);
		run::preview(&records);
		return Ok(());
	}

	// Credential first: fail before any parsing if we could not submit anyway.
	let credential = Credential::resolve()?;

	let records = parse_document(&read_document(&cli.file)?);
	println!("Found {} issue(s) to create", records.len());

	let target = SubmitTarget {
		api_root: cli.api_root,
		owner: cli.owner,
		repo: cli.repo,
		timeout: Duration::from_secs(cli.timeout_secs),
	};
	let submitter = Submitter::new(target)?;

	let summary = run::submit_all(&submitter, &records, &credential);
	println!("Created {}/{} issues", summary.created, summary.attempted);

	// Per-record failures are reported above but deliberately do not fail the
	// run; the exit code only reflects fatal setup errors.
	drop(credential); // scrubs the token buffer
	Ok(())
}

fn read_document(path: &Path) -> Result<String> {
	if !path.exists() {
		bail!("issues file not found: {}", path.display());
	}
	fs::read_to_string(path).wrap_err_with(|| format!("failed to read {}", path.display()))
}
