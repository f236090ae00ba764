//! HTML rendering: Markdown converted with pulldown-cmark inside a page.

use pulldown_cmark::{html, Parser};

use super::format::RenderOptions;
use super::group::ChangeGroup;
use super::markdown::render_markdown;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Changelog</title>
  </head>
  <body>
"#;

const PAGE_TAIL: &str = "  </body>\n</html>\n";

/// Convert a Markdown document to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut body = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut body, Parser::new(markdown));
    body
}

/// Wrap an HTML fragment in the report page.
pub fn wrap_page(body: &str) -> String {
    let mut page = String::with_capacity(PAGE_HEAD.len() + body.len() + PAGE_TAIL.len());
    page.push_str(PAGE_HEAD);
    page.push_str(body);
    page.push_str(PAGE_TAIL);
    page
}

/// Render groups as a standalone HTML page.
pub fn render_html(groups: &[ChangeGroup], options: &RenderOptions) -> String {
    wrap_page(&markdown_to_html(&render_markdown(groups, options)))
}
