//! Commit ranges between consecutive release tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default maximum number of ranges in a report.
pub const DEFAULT_RANGE_LIMIT: usize = 500;

/// Commits reachable from `to` but not from `from`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffRange {
    /// Older tag.
    pub from: String,
    /// Newer tag.
    pub to: String,
}

impl DiffRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for DiffRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.from, self.to)
    }
}

/// Build ranges between consecutive tags.
///
/// `tags` must be newest first. Each range goes from `tags[i + 1]` to
/// `tags[i]`, and at most `limit` ranges are returned. A limit of zero
/// yields no ranges.
pub fn build_ranges(tags: &[String], limit: usize) -> Vec<DiffRange> {
    tags.windows(2)
        .take(limit)
        .map(|pair| DiffRange::new(pair[1].as_str(), pair[0].as_str()))
        .collect()
}

/// Clamp a signed limit from user input; negatives mean zero.
pub fn clamp_limit(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}
