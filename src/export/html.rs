//! Markdown to HTML conversion.

use pulldown_cmark::{Options, Parser, html};

/// Converts markdown text to an HTML fragment.
///
/// Enables the extensions vault documents commonly rely on:
/// tables, footnotes, strikethrough, task lists and heading attributes.
///
/// # Example
///
/// ```
/// use quire::export::markdown_to_html;
///
/// let html = markdown_to_html("# Hello\n\nWorld");
/// assert!(html.contains("<h1>Hello</h1>"));
/// assert!(html.contains("<p>World</p>"));
/// ```
pub fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES;

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, Parser::new_ext(markdown, options));
    out
}
