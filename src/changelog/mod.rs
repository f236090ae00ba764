//! Change groups and report rendering.

pub mod format;
pub mod group;
pub mod html;
pub mod json;
pub mod markdown;
pub mod report;
pub mod writer;

pub use format::{OutputFormat, RenderOptions};
pub use group::{aggregate, aggregate_parallel, ChangeGroup};
pub use json::{parse_report_json, render_json};
pub use report::{build_report, collect_groups, Report, ReportOptions};
pub use writer::write_report;
