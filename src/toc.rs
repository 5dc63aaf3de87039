//! GitHub-flavored markdown anchors and links for headings and `@see` references.

use regex::Regex;
use std::sync::LazyLock;

static RE_MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]\([^)]*\)").unwrap());

static RE_BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:https?|ftp)://[^\s)]+").unwrap());

/// Link for a heading name or a `@see` reference.
///
/// - relative paths (`/`, `./`, `../`) link to themselves
/// - existing markdown links are kept as-is
/// - bare URLs are wrapped
/// - anything else links to the heading anchor of the same text
pub fn render_toc_link(text: &str) -> String {
    if text.starts_with('/') || text.starts_with("./") || text.starts_with("../") {
        return format!("[{}]({})", text, text);
    }

    if RE_MARKDOWN_LINK.is_match(text) {
        return text.to_string();
    }

    if RE_BARE_URL.is_match(text) {
        return RE_BARE_URL.replace_all(text, "[$0]($0)").into_owned();
    }

    format!("[{}](#{})", text, github_slug(text))
}

/// Index list item, indented by `depth` levels.
pub fn render_toc_item(title: &str, depth: usize) -> String {
    format!("{}* {}", "  ".repeat(depth), render_toc_link(title))
}

/// GitHub heading anchor: lowercase, keep alphanumerics, `_`, spaces and hyphens, spaces become hyphens.
pub fn github_slug(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == ' ' || *c == '-')
        .collect::<String>()
        .replace(' ', "-")
}
