//! Rewrites wiki-style embeds and links into plain Markdown.
//!
//! Two independent passes, applied embeds first: an embed `![[x]]` contains
//! the link pattern `[[x]]`, so running the link pass first would leave a
//! stray `!` in front of an ordinary link.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static EMBED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[\[([^\[\]|]+?)(?:\|([^\[\]]*))?\]\]").unwrap());

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\[\]|]+)(?:\|([^\[\]]+))?\]\]").unwrap());

/// Applies [`rewrite_embeds`] and then [`rewrite_links`].
///
/// ```
/// use quire::export::transform_embeds_and_links;
///
/// let text = "See [[Plan|the plan]] and ![[imgs/chart.png]].";
/// assert_eq!(
///     transform_embeds_and_links(text),
///     "See [the plan](Plan) and ![chart.png](imgs/chart.png)."
/// );
/// ```
pub fn transform_embeds_and_links(text: &str) -> String {
    rewrite_links(&rewrite_embeds(text))
}

/// `![[folder/name|alt]]` becomes `![alt](folder/name)`.
///
/// Without alt text the bare file name is used.
pub fn rewrite_embeds(text: &str) -> String {
    EMBED_RE
        .replace_all(text, |caps: &Captures| {
            let target = &caps[1];
            let alt = match caps.get(2) {
                Some(alt) => alt.as_str(),
                None => file_name(target),
            };
            format!("![{}]({})", alt, target)
        })
        .into_owned()
}

/// `[[target|display]]` becomes `[display](target)`.
///
/// Without display text the target is shown.
pub fn rewrite_links(text: &str) -> String {
    LINK_RE
        .replace_all(text, |caps: &Captures| {
            let target = &caps[1];
            let display = caps.get(2).map_or(target, |m| m.as_str());
            format!("[{}]({})", display, target)
        })
        .into_owned()
}

fn file_name(target: &str) -> &str {
    target.rsplit(['/', '\\']).next().unwrap_or(target)
}
