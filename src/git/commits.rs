//! Commit records and the git-backed commit source.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CommitSourceError;

use super::command::Git;
use super::range::DiffRange;

/// Pretty format emitting one JSON object per commit, each followed by a comma.
///
/// `%f` is the sanitized subject line, which keeps ordinary messages free of
/// quotes and backslashes.
const COMMIT_LOG_FORMAT: &str = r#"--pretty=format:{"shortcommit":"%h", "commit":"%H", "author":"%an", "email":"%ae", "date":"%aI", "message":"%f"},"#;

/// A single commit in a release range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    #[serde(rename = "shortcommit")]
    pub short_hash: String,
    #[serde(rename = "commit")]
    pub hash: String,
    pub author: String,
    pub email: String,
    /// Author date, strict ISO 8601.
    pub date: String,
    /// First line of the message.
    pub message: String,
}

/// Anything that can list the commits of a range.
pub trait CommitSource {
    fn commits(&self, range: &DiffRange) -> Result<Vec<CommitRecord>, CommitSourceError>;
}

impl<F> CommitSource for F
where
    F: Fn(&DiffRange) -> Result<Vec<CommitRecord>, CommitSourceError>,
{
    fn commits(&self, range: &DiffRange) -> Result<Vec<CommitRecord>, CommitSourceError> {
        self(range)
    }
}

/// Parse the output of `git log` run with [`COMMIT_LOG_FORMAT`].
///
/// Blank output is an empty range. Anything that does not decode into
/// commit records, or carries an unparseable date, is malformed.
pub fn parse_commit_log(text: &str) -> Result<Vec<CommitRecord>, CommitSourceError> {
    let body = text.trim();
    if body.is_empty() {
        return Ok(Vec::new());
    }

    let body = body.strip_suffix(',').unwrap_or(body);
    let records: Vec<CommitRecord> = serde_json::from_str(&format!("[{}]", body))
        .map_err(|e| CommitSourceError::Malformed {
            message: e.to_string(),
        })?;

    for record in &records {
        if DateTime::parse_from_rfc3339(&record.date).is_err() {
            return Err(CommitSourceError::InvalidDate {
                commit: record.short_hash.clone(),
                date: record.date.clone(),
            });
        }
    }

    Ok(records)
}

/// Commit source backed by `git log <from>..<to>`.
#[derive(Debug, Clone)]
pub struct GitCommitSource {
    git: Git,
}

impl GitCommitSource {
    pub fn new(git: Git) -> Self {
        Self { git }
    }
}

impl CommitSource for GitCommitSource {
    fn commits(&self, range: &DiffRange) -> Result<Vec<CommitRecord>, CommitSourceError> {
        let revspec = range.to_string();
        let output = self.git.run(&["log", COMMIT_LOG_FORMAT, &revspec])?;
        let records = parse_commit_log(&output)?;

        debug!(range = %revspec, count = records.len(), "Fetched commits");
        Ok(records)
    }
}
