//! CSS themes for standalone HTML exports.

use std::path::{Path, PathBuf};

use super::host::HostError;

/// Light theme for exported pages.
pub const THEME_DEFAULT: &str = r#"
:root { --fg: #24292f; --muted: #57606a; --rule: #d0d7de; --code-bg: #f6f8fa; --link: #0969da; }
body { margin: 0; background: #fff; color: var(--fg); }
article {
    font: 16px/1.65 Charter, 'Bitstream Charter', Georgia, serif;
    max-width: 46rem;
    margin: 0 auto;
    padding: 3rem 1.5rem 4rem;
}
.title { font-size: 2.2rem; margin: 0 0 2rem; border-bottom: 1px solid var(--rule); padding-bottom: 0.5rem; }
h1, h2, h3, h4 { font-family: system-ui, sans-serif; line-height: 1.25; }
a { color: var(--link); }
pre, code { font-family: ui-monospace, Menlo, Consolas, monospace; font-size: 0.88em; }
pre { background: var(--code-bg); padding: 0.9rem 1rem; overflow-x: auto; }
:not(pre) > code { background: var(--code-bg); padding: 0 0.25em; }
blockquote { margin: 1rem 0; padding: 0 1rem; border-left: 4px solid var(--rule); color: var(--muted); }
table { border-collapse: collapse; margin: 1rem 0; }
th, td { border: 1px solid var(--rule); padding: 0.35rem 0.75rem; }
img { max-width: 100%; }
li > input[type="checkbox"] { margin-right: 0.4em; }
.footnote-definition { font-size: 0.85em; color: var(--muted); }
@media print { article { max-width: none; padding: 0; } a { color: inherit; } }
"#;

/// Dark theme for exported pages.
pub const THEME_DARK: &str = r#"
:root { --fg: #d6d6d6; --muted: #9a9a9a; --rule: #3a3a3a; --code-bg: #262626; --link: #7cb7ff; }
body { margin: 0; background: #1a1a1a; color: var(--fg); }
article {
    font: 16px/1.65 Charter, 'Bitstream Charter', Georgia, serif;
    max-width: 46rem;
    margin: 0 auto;
    padding: 3rem 1.5rem 4rem;
}
.title { font-size: 2.2rem; margin: 0 0 2rem; border-bottom: 1px solid var(--rule); padding-bottom: 0.5rem; }
h1, h2, h3, h4 { font-family: system-ui, sans-serif; line-height: 1.25; color: #f0f0f0; }
a { color: var(--link); }
pre, code { font-family: ui-monospace, Menlo, Consolas, monospace; font-size: 0.88em; }
pre { background: var(--code-bg); padding: 0.9rem 1rem; overflow-x: auto; }
:not(pre) > code { background: var(--code-bg); padding: 0 0.25em; }
blockquote { margin: 1rem 0; padding: 0 1rem; border-left: 4px solid var(--rule); color: var(--muted); }
table { border-collapse: collapse; margin: 1rem 0; }
th, td { border: 1px solid var(--rule); padding: 0.35rem 0.75rem; }
img { max-width: 100%; }
li > input[type="checkbox"] { margin-right: 0.4em; }
.footnote-definition { font-size: 0.85em; color: var(--muted); }
"#;

/// Resolves a theme setting to CSS.
///
/// `None` and `"default"` give the light theme, `"dark"` the dark one.
/// Anything else is a CSS file path; relative paths are resolved against
/// `project_root`.
pub fn theme_css(theme: Option<&str>, project_root: &Path) -> Result<String, HostError> {
    match theme.map(str::trim) {
        None | Some("") | Some("default") => Ok(THEME_DEFAULT.to_string()),
        Some("dark") => Ok(THEME_DARK.to_string()),
        Some(path) => {
            let path = PathBuf::from(path);
            let path = if path.is_absolute() {
                path
            } else {
                project_root.join(path)
            };
            std::fs::read_to_string(&path).map_err(|source| HostError::Theme { path, source })
        }
    }
}
