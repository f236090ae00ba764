//! Version parsing, ordering and stability filtering.

pub mod parse;
pub mod stability;

pub use parse::{compare_versions, parse_version, sort_versions};
pub use stability::{filter_stable, is_prerelease};
