//! Markdown rendering of change groups.

use super::format::RenderOptions;
use super::group::ChangeGroup;
use crate::git::CommitRecord;

/// Report title.
pub const MARKDOWN_HEADER: &str = "# Changelog\n";

/// Characters that would end the link text or open inline HTML.
const LINK_TEXT_SPECIALS: &[char] = &['\\', '[', ']', '<', '>'];

/// Characters that would end or break a link destination.
const LINK_DEST_SPECIALS: &[char] = &['\\', '(', ')', '<', '>'];

fn escape_with(text: &str, specials: &[char]) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if specials.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Format one commit as a list item.
///
/// `git log %f` joins subject words with `-`; they are turned back into
/// spaces here.
fn format_commit_line(commit: &CommitRecord, options: &RenderOptions) -> String {
    let mut parts = Vec::with_capacity(3);

    if options.commit_links {
        parts.push(match &options.origin_url {
            Some(origin) => format!("[{}]({}commit/{})", commit.short_hash, origin, commit.hash),
            None => format!("`{}`", commit.short_hash),
        });
    }

    parts.push(commit.message.replace('-', " "));

    if options.author_links {
        parts.push(format!(
            "[{}](mailto:{})",
            escape_with(&commit.author, LINK_TEXT_SPECIALS),
            escape_with(&commit.email, LINK_DEST_SPECIALS)
        ));
    }

    format!("* {}\n", parts.join(" "))
}

/// Render groups as a Markdown document.
///
/// With no groups the document is just the title.
pub fn render_markdown(groups: &[ChangeGroup], options: &RenderOptions) -> String {
    let mut out = MARKDOWN_HEADER.to_string();

    for group in groups {
        out.push_str(&format!("\n## {}\n\n", group.name));

        for commit in &group.commits {
            out.push_str(&format_commit_line(commit, options));
        }
    }

    out
}
