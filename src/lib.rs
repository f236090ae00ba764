//! changeroll - A CLI tool that generates a changelog report from git tags.
//!
//! # Overview
//!
//! changeroll reads the decorated tag history of a git repository, orders the
//! release tags, builds the commit range between each pair of consecutive
//! releases, and renders the commits of every range as Markdown, HTML or
//! JSON.

pub mod changelog;
pub mod error;
pub mod git;
pub mod version;

// Re-export commonly used types
pub use changelog::{ChangeGroup, OutputFormat, Report, ReportOptions};
pub use error::{AggregateError, CommitSourceError, GitError, RenderError, ReportError, TagError, VersionError};
pub use git::{CommitRecord, CommitSource, DiffRange};
