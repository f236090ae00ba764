//! Error types for changeroll modules using thiserror.

use thiserror::Error;

/// Errors from version string parsing and comparison.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Malformed version '{version}': segment '{segment}' contains no digits")]
    Malformed { version: String, segment: String },

    #[error("Malformed version '{version}': component '{component}' does not fit in 64 bits")]
    Overflow { version: String, component: String },
}

/// Errors from spawning the git executable.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable '{0}' not found. Install git or set CHANGEROLL_GIT to its path")]
    NotInstalled(String),

    #[error("Failed to spawn git: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git {command} exited with code {code}: {stderr}")]
    NonZeroExit {
        command: String,
        code: i32,
        stderr: String,
    },
}

/// Errors from release tag extraction.
#[derive(Error, Debug)]
pub enum TagError {
    #[error("Invalid tag pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Failed to read tag history: {0}")]
    Git(#[from] GitError),

    #[error("Failed to order tags: {0}")]
    Version(#[from] VersionError),
}

/// Errors from a commit-record source.
#[derive(Error, Debug)]
pub enum CommitSourceError {
    #[error("Failed to read commit log: {0}")]
    Git(#[from] GitError),

    #[error("Malformed commit data: {message}")]
    Malformed { message: String },

    #[error("Commit {commit} has an invalid date '{date}'")]
    InvalidDate { commit: String, date: String },
}

/// Errors from assembling change groups.
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Failed to collect commits for {range}: {source}")]
    Range {
        range: String,
        #[source]
        source: CommitSourceError,
    },

    #[error("Failed to start worker pool: {0}")]
    ThreadPool(String),
}

/// Errors from rendering a report.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write report to {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from building a full report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Tags(#[from] TagError),

    #[error("Failed to resolve origin remote: {0}")]
    Git(#[from] GitError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
