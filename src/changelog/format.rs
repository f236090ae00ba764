//! Report output formats and presentation settings.

use std::fmt;

/// Output format of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
    Html,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Json => "json",
            Self::Html => "html",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "html" => Ok(Self::Html),
            _ => Err(format!(
                "Unknown format: {} (expected markdown, json or html)",
                s
            )),
        }
    }
}

/// What each Markdown/HTML commit line shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Browsable project URL ending in `/`, used for commit links.
    pub origin_url: Option<String>,
    pub commit_links: bool,
    pub author_links: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            origin_url: None,
            commit_links: true,
            author_links: true,
        }
    }
}

impl RenderOptions {
    /// Only the commit message, no commit or author links.
    pub fn message_only(mut self) -> Self {
        self.commit_links = false;
        self.author_links = false;
        self
    }
}
