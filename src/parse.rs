//! Line scanner for `ISSUES.md`-style documents.
//!
//! The grammar is deliberately small: blocks separated by `---` lines, with
//! `**Label**: value` scalars and `### Section` bodies inside each block.
//! Fields are matched independently, so any subset may be present; a block
//! without a title is not an issue and is dropped.

/// One candidate issue, parsed from a single block of the source document.
///
/// Immutable after parsing. `title` is the only required field.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IssueRecord {
	pub title: String,
	/// The `**Type**` label (e.g. "Feature", "Bug"). Informational only.
	pub kind: Option<String>,
	pub priority: Option<String>,
	pub labels: Vec<String>,
	pub description: Option<String>,
	pub problem: Option<String>,
	pub solution: Option<String>,
	pub implementation: Option<String>,
}

/// Parse a whole document into issue records, in document order.
///
/// Pure function over text: no IO, no side effects. Blocks lacking a
/// non-empty title are silently excluded, as are empty blocks produced by
/// consecutive separators.
pub fn parse_document(text: &str) -> Vec<IssueRecord> {
	split_blocks(text).into_iter().filter_map(|block| parse_block(&block)).collect()
}

/// Split the document on separator lines (a line consisting solely of `---`).
fn split_blocks(text: &str) -> Vec<Vec<&str>> {
	let mut blocks = vec![Vec::new()];
	for line in text.lines() {
		if line.trim_end() == "---" {
			blocks.push(Vec::new());
		} else {
			blocks.last_mut().expect("blocks starts non-empty").push(line);
		}
	}
	blocks
}

fn parse_block(lines: &[&str]) -> Option<IssueRecord> {
	// Each pattern is matched independently over the whole block; the first
	// occurrence wins. Any subset of fields may be present.
	let record = IssueRecord {
		title: scalar(lines, "Title").map(str::to_string).unwrap_or_default(),
		kind: scalar(lines, "Type").map(str::to_string),
		priority: scalar(lines, "Priority").map(str::to_string),
		labels: scalar(lines, "Labels").map(split_labels).unwrap_or_default(),
		description: section(lines, "Description"),
		problem: section(lines, "Problem Statement"),
		solution: section(lines, "Proposed Solution"),
		implementation: section(lines, "Implementation Ideas"),
	};

	// Title is the sole required field.
	if record.title.is_empty() { None } else { Some(record) }
}

/// Find the first `**Label**: value` line and return the trimmed value.
/// An empty value is preserved as `Some("")`.
fn scalar<'a>(lines: &[&'a str], label: &str) -> Option<&'a str> {
	let prefix = format!("**{label}**:");
	lines.iter().find_map(|line| line.strip_prefix(&prefix)).map(str::trim)
}

/// Find the first `### Name` heading and collect its body, which runs until
/// the next `###` heading or the end of the block.
fn section(lines: &[&str], name: &str) -> Option<String> {
	let start = lines.iter().position(|line| line.trim_end() == format!("### {name}"))? + 1;
	let body: Vec<&str> = lines[start..].iter().take_while(|line| !line.starts_with("###")).copied().collect();
	let body = body.join("\n").trim().to_string();
	if body.is_empty() { None } else { Some(body) }
}

/// Comma-separated, each item trimmed. A value with no text at all yields an
/// empty sequence rather than a single empty label.
fn split_labels(value: &str) -> Vec<String> {
	if value.trim().is_empty() {
		return Vec::new();
	}
	value.split(',').map(|label| label.trim().to_string()).collect()
}
