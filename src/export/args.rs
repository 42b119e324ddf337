//! Anchors relative paths in extra converter arguments to the project root.
//!
//! Users write filter and template arguments relative to their vault, but
//! the converter runs with the document's folder as its working directory,
//! so relative paths must be made explicit before the call.

use std::path::{Component, Path};

/// Splits the settings text block into argument tokens.
///
/// Each line is one token. Lines are trimmed and blank lines dropped, so a
/// trailing newline never turns into an empty converter argument.
pub fn split_arg_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Rewrites relative path arguments so they are anchored at `project_root`.
///
/// - `opt=value`: only the value is considered. A relative value containing
///   a path separator becomes `opt=<root>/value`.
/// - A bare token containing a separator becomes `<root>/token` unless it is
///   absolute or starts with `-`.
/// - Everything else is passed through.
///
/// ```
/// use std::path::Path;
/// use quire::export::resolve_args;
///
/// let args = vec![
///     "--lua-filter=filters/cite.lua".to_string(),
///     "--citeproc".to_string(),
/// ];
/// let resolved = resolve_args(&args, Path::new("/vault"));
/// assert_eq!(resolved[0], "--lua-filter=/vault/filters/cite.lua");
/// assert_eq!(resolved[1], "--citeproc");
/// ```
pub fn resolve_args<S: AsRef<str>>(args: &[S], project_root: &Path) -> Vec<String> {
    args.iter()
        .map(|arg| resolve_arg(arg.as_ref(), project_root))
        .collect()
}

fn resolve_arg(arg: &str, project_root: &Path) -> String {
    if let Some((prefix, value)) = arg.split_once('=') {
        if has_separator(value) && !is_absolute(value) {
            return format!("{}={}", prefix, join_root(project_root, value));
        }
        return arg.to_string();
    }

    if has_separator(arg) && !is_absolute(arg) && !arg.starts_with('-') {
        return join_root(project_root, arg);
    }

    arg.to_string()
}

fn has_separator(s: &str) -> bool {
    s.contains('/') || s.contains('\\')
}

/// Absolute on any platform: leading `/`, leading `\`, or a drive letter.
fn is_absolute(s: &str) -> bool {
    s.starts_with('/') || s.starts_with('\\') || has_drive_prefix(s)
}

fn has_drive_prefix(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic()
    )
}

fn join_root(project_root: &Path, relative: &str) -> String {
    let mut joined = project_root.to_path_buf();
    for component in Path::new(relative).components() {
        if component != Component::CurDir {
            joined.push(component);
        }
    }
    joined.to_string_lossy().into_owned()
}
