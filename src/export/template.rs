//! Standalone HTML page wrapping a rendered document.

use minijinja::{Environment, context};

use super::host::HostError;

/// Page template for HTML exports.
pub const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ title|e }}</title>
    <style>{{ theme_css }}</style>
</head>
<body>
    <article>
        <h1 class="title">{{ title|e }}</h1>
        {{ content }}
    </article>
</body>
</html>"##;

/// Renders an HTML fragment into a complete page.
///
/// The fragment and CSS are inserted verbatim; the title is escaped.
pub fn render_page(title: &str, fragment: &str, theme_css: &str) -> Result<String, HostError> {
    let mut env = Environment::new();
    env.add_template("page", PAGE_TEMPLATE)?;
    let page = env.get_template("page")?.render(context! {
        title => title,
        content => fragment,
        theme_css => theme_css,
    })?;
    Ok(page)
}
