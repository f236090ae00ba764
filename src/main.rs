//! changeroll - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use changeroll::changelog::{build_report, write_report, OutputFormat, ReportOptions};
use changeroll::git::range::{clamp_limit, DEFAULT_RANGE_LIMIT};
use changeroll::git::tags::DEFAULT_TAG_PATTERN;
use changeroll::git::{Git, TagOrdering, TagQuery};

/// Generate a changelog report from git commits and release tags.
#[derive(Parser, Debug)]
#[command(name = "changeroll")]
#[command(about = "Generate a changelog report from git commits and release tags")]
#[command(version)]
struct Cli {
    /// Regular expression for release tag names
    #[arg(short, long, default_value = DEFAULT_TAG_PATTERN)]
    pattern: String,

    /// Output format: markdown, json or html
    #[arg(short, long, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Maximum number of release ranges in the report
    #[arg(short, long, default_value_t = DEFAULT_RANGE_LIMIT as i64, allow_negative_numbers = true)]
    limit: i64,

    /// Omit commit links on Markdown and HTML reports
    #[arg(long)]
    no_commit: bool,

    /// Omit author links on Markdown and HTML reports
    #[arg(long)]
    no_author: bool,

    /// Only show commit messages on Markdown and HTML reports
    #[arg(long)]
    only_message: bool,

    /// Re-sort release tags by version instead of trusting log order
    #[arg(long)]
    sort: bool,

    /// Skip prerelease tags (alfa, beta, rc)
    #[arg(long)]
    stable: bool,

    /// Number of ranges to fetch in parallel
    #[arg(short, long, default_value_t = 1)]
    jobs: usize,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Repository directory
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    /// Log debug information to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn report_options(&self) -> ReportOptions {
        let ordering = if self.sort {
            TagOrdering::Version
        } else {
            TagOrdering::Log
        };

        ReportOptions {
            tags: TagQuery {
                pattern: self.pattern.clone(),
                ordering,
                stable_only: self.stable,
            },
            limit: clamp_limit(self.limit),
            jobs: self.jobs.max(1),
            commit_links: !(self.no_commit || self.only_message),
            author_links: !(self.no_author || self.only_message),
        }
    }
}

/// Log to stderr so stdout only carries the report. RUST_LOG wins.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "changeroll=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let git = Git::discover(&cli.repo).context("git is required to read the repository history")?;

    let report = build_report(&git, &cli.report_options()).with_context(|| {
        format!("Failed to build changelog report for {}", cli.repo.display())
    })?;

    let rendered = report
        .render(cli.format, cli.pretty)
        .with_context(|| format!("Failed to render {} report", cli.format))?;

    match &cli.output {
        Some(path) => write_report(path, &rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", rendered.trim_end()),
    }

    Ok(())
}
