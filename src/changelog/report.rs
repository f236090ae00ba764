//! End-to-end report pipeline.

use tracing::info;

use crate::error::{RenderError, ReportError};
use crate::git::range::DEFAULT_RANGE_LIMIT;
use crate::git::{
    build_ranges, fetch_project_url, fetch_tags, release_tags, CommitSource, Git,
    GitCommitSource, TagQuery,
};

use super::format::{OutputFormat, RenderOptions};
use super::group::{aggregate_parallel, ChangeGroup};
use super::html::render_html;
use super::json::render_json;
use super::markdown::render_markdown;

/// Settings for one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub tags: TagQuery,
    /// Maximum number of release ranges.
    pub limit: usize,
    /// Ranges fetched at once.
    pub jobs: usize,
    pub commit_links: bool,
    pub author_links: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            tags: TagQuery::default(),
            limit: DEFAULT_RANGE_LIMIT,
            jobs: 1,
            commit_links: true,
            author_links: true,
        }
    }
}

/// A finished report: groups plus how to present them.
#[derive(Debug, Clone)]
pub struct Report {
    groups: Vec<ChangeGroup>,
    render: RenderOptions,
    json: String,
}

impl Report {
    pub fn new(groups: Vec<ChangeGroup>, render: RenderOptions) -> Result<Self, RenderError> {
        let json = render_json(&groups, false)?;
        Ok(Self {
            groups,
            render,
            json,
        })
    }

    pub fn groups(&self) -> &[ChangeGroup] {
        &self.groups
    }

    /// Compact JSON encoding of the groups.
    pub fn json(&self) -> &str {
        &self.json
    }

    pub fn to_markdown(&self) -> String {
        render_markdown(&self.groups, &self.render)
    }

    pub fn to_html(&self) -> String {
        render_html(&self.groups, &self.render)
    }

    /// Render in `format`. `pretty` only affects JSON.
    pub fn render(&self, format: OutputFormat, pretty: bool) -> Result<String, RenderError> {
        match format {
            OutputFormat::Markdown => Ok(self.to_markdown()),
            OutputFormat::Html => Ok(self.to_html()),
            OutputFormat::Json if pretty => render_json(&self.groups, true),
            OutputFormat::Json => Ok(self.json.clone()),
        }
    }
}

/// Turn a raw tag log into change groups.
///
/// This is the whole pipeline minus process spawning: tags are extracted
/// and selected, ranges built, and each range handed to `source`.
pub fn collect_groups<S>(
    tag_log: &str,
    source: &S,
    options: &ReportOptions,
) -> Result<Vec<ChangeGroup>, ReportError>
where
    S: CommitSource + Sync + ?Sized,
{
    let tags = release_tags(tag_log, &options.tags)?;
    groups_for_tags(&tags, source, options)
}

fn groups_for_tags<S>(
    tags: &[String],
    source: &S,
    options: &ReportOptions,
) -> Result<Vec<ChangeGroup>, ReportError>
where
    S: CommitSource + Sync + ?Sized,
{
    let ranges = build_ranges(tags, options.limit);

    info!(
        tags = tags.len(),
        ranges = ranges.len(),
        jobs = options.jobs,
        "Collecting release ranges"
    );

    Ok(aggregate_parallel(&ranges, source, options.jobs)?)
}

/// Build a report for the repository `git` is bound to.
pub fn build_report(git: &Git, options: &ReportOptions) -> Result<Report, ReportError> {
    let tags = fetch_tags(git, &options.tags)?;
    let source = GitCommitSource::new(git.clone());
    let groups = groups_for_tags(&tags, &source, options)?;

    let origin_url = if options.commit_links {
        fetch_project_url(git)?
    } else {
        None
    };

    let render = RenderOptions {
        origin_url,
        commit_links: options.commit_links,
        author_links: options.author_links,
    };

    Ok(Report::new(groups, render)?)
}
