//! Splits YAML frontmatter from a markdown document.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// A document split into metadata and body.
#[derive(Debug, Clone, PartialEq)]
pub struct Frontmatter<'a> {
    /// Parsed YAML mapping; empty when the document has no frontmatter.
    pub metadata: Mapping,
    /// Everything after the closing delimiter.
    pub body: &'a str,
}

/// Errors during frontmatter parsing.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("invalid YAML in frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("frontmatter must be a mapping of keys to values")]
    NotAMapping,
}

/// Splits leading `---` delimited YAML from the body.
///
/// The opening delimiter must be the first line. A document whose opening
/// delimiter is never closed has no frontmatter and is returned whole.
///
/// ```
/// use quire::infra::split_frontmatter;
///
/// let doc = "---\ntitle: Plan\n---\n# Body\n";
/// let split = split_frontmatter(doc).unwrap();
/// assert_eq!(split.body, "# Body\n");
/// assert_eq!(split.metadata.get("title").and_then(|v| v.as_str()), Some("Plan"));
/// ```
pub fn split_frontmatter(content: &str) -> Result<Frontmatter<'_>, FrontmatterError> {
    let after_opening = if content.starts_with("---\r\n") {
        5
    } else if content.starts_with("---\n") {
        4
    } else {
        return Ok(no_frontmatter(content));
    };

    let rest = &content[after_opening..];
    let Some(closing) = find_closing_delimiter(rest) else {
        return Ok(no_frontmatter(content));
    };

    let yaml = &rest[..closing];
    let after_closing = &rest[closing + 3..];
    let body = after_closing
        .strip_prefix("\r\n")
        .or_else(|| after_closing.strip_prefix('\n'))
        .unwrap_or(after_closing);

    if yaml.trim().is_empty() {
        return Ok(Frontmatter {
            metadata: Mapping::new(),
            body,
        });
    }

    let metadata = match serde_yaml::from_str::<Value>(yaml)? {
        Value::Mapping(map) => map,
        Value::Null => Mapping::new(),
        _ => return Err(FrontmatterError::NotAMapping),
    };

    Ok(Frontmatter { metadata, body })
}

fn no_frontmatter(content: &str) -> Frontmatter<'_> {
    Frontmatter {
        metadata: Mapping::new(),
        body: content,
    }
}

/// Finds the byte offset of a line consisting of exactly `---`.
fn find_closing_delimiter(content: &str) -> Option<usize> {
    let mut pos = 0;
    for line in content.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            return Some(pos);
        }
        pos += line.len();
    }
    None
}
