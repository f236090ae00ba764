//! Git operations through the system git executable.

pub mod command;
pub mod commits;
pub mod range;
pub mod remote;
pub mod tags;

pub use command::Git;
pub use commits::{parse_commit_log, CommitRecord, CommitSource, GitCommitSource};
pub use range::{build_ranges, DiffRange};
pub use remote::{fetch_project_url, project_url};
pub use tags::{extract_tags, fetch_tags, release_tags, TagOrdering, TagQuery};
