//! Release tag extraction from decorated git log output.

use regex_lite::Regex;
use tracing::{debug, info};

use crate::error::{GitError, TagError};
use crate::version::{filter_stable, sort_versions};

use super::command::Git;

/// Default pattern for release tag names.
pub const DEFAULT_TAG_PATTERN: &str = r"v[\d{1,4}\.]{1,}";

/// Arguments for the decorated, newest-first tag log.
///
/// Each output line looks like `2024-03-01 10:00:00 +0100 @ (tag: v1.2.0)`.
const TAG_LOG_ARGS: &[&str] = &[
    "log",
    "--tags",
    "--simplify-by-decoration",
    "--pretty=%ai @%d",
];

/// How extracted tags are ordered before ranges are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagOrdering {
    /// Trust the log's newest-first order.
    #[default]
    Log,
    /// Re-sort newest first by numeric version.
    Version,
}

/// Which tags are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagQuery {
    pub pattern: String,
    pub ordering: TagOrdering,
    pub stable_only: bool,
}

impl Default for TagQuery {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TAG_PATTERN.to_string(),
            ordering: TagOrdering::default(),
            stable_only: false,
        }
    }
}

/// Build the per-line matcher for a tag name pattern.
fn tag_line_regex(pattern: &str) -> Result<Regex, TagError> {
    Regex::new(&format!(r"(.*\s)@\s.*tag:\s({pattern})")).map_err(|e| TagError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Extract release tag names from decorated log text.
///
/// Lines keep their order and duplicates are kept. When a line carries
/// several matching tags the last one wins. Commas are stripped from the
/// captured name. Lines without a match are skipped, so empty input yields
/// an empty list.
pub fn extract_tags(text: &str, pattern: &str) -> Result<Vec<String>, TagError> {
    let line_re = tag_line_regex(pattern)?;

    let tags: Vec<String> = text
        .lines()
        .filter_map(|line| line_re.captures(line))
        .filter_map(|caps| caps.get(2).map(|m| m.as_str().replace(',', "")))
        .filter(|tag| !tag.is_empty())
        .collect();

    debug!(count = tags.len(), "Extracted release tags");
    Ok(tags)
}

/// Read the decorated tag log, newest first.
pub fn fetch_tag_log(git: &Git) -> Result<String, GitError> {
    git.run(TAG_LOG_ARGS)
}

/// Apply stability and ordering settings to extracted tags.
///
/// Prereleases are dropped before sorting, so a prerelease that does not
/// parse as a version cannot fail a stable-only run.
pub fn select_tags(mut tags: Vec<String>, query: &TagQuery) -> Result<Vec<String>, TagError> {
    if query.stable_only {
        let before = tags.len();
        tags = filter_stable(&tags);
        debug!(dropped = before - tags.len(), "Filtered prerelease tags");
    }

    if query.ordering == TagOrdering::Version {
        sort_versions(&mut tags)?;
    }

    Ok(tags)
}

/// Extract and select release tags from decorated log text.
pub fn release_tags(log: &str, query: &TagQuery) -> Result<Vec<String>, TagError> {
    select_tags(extract_tags(log, &query.pattern)?, query)
}

/// Fetch release tags from the repository.
pub fn fetch_tags(git: &Git, query: &TagQuery) -> Result<Vec<String>, TagError> {
    let log = fetch_tag_log(git)?;
    let tags = release_tags(&log, query)?;

    info!(count = tags.len(), pattern = %query.pattern, "Found release tags");
    Ok(tags)
}
