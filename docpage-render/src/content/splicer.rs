//! Component placeholder splicing.
//!
//! Article markdown may contain markers of the form
//! `<!-- include components/Name -->`. [`splice`] scans the content once,
//! left to right, and yields markdown runs interleaved with component
//! references. Markers naming an unregistered component are dropped.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::warn;

use super::registry::ComponentLookup;

/// Placeholder marker. One whitespace character on each side, ASCII-letter
/// names only.
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--\sinclude\scomponents/([a-zA-Z]+)\s-->").expect("valid regex")
});

/// One piece of spliced content, borrowing from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ContentSegment<'a> {
    /// Markdown to hand to the renderer. Never empty.
    Markdown(&'a str),
    /// Name of a registered component.
    Component(&'a str),
}

/// Splits `content` into markdown and component segments.
///
/// Empty input yields no segments; input without markers yields a single
/// markdown segment equal to the input.
pub fn splice<'a, L>(content: &'a str, components: &L) -> Vec<ContentSegment<'a>>
where
    L: ComponentLookup + ?Sized,
{
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in MARKER_RE.captures_iter(content) {
        let (Some(marker), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        let before = &content[cursor..marker.start()];
        if !before.is_empty() {
            segments.push(ContentSegment::Markdown(before));
        }

        if components.contains(name.as_str()) {
            segments.push(ContentSegment::Component(name.as_str()));
        } else {
            warn!(component = name.as_str(), "unregistered component placeholder dropped");
        }

        cursor = marker.end();
    }

    let rest = &content[cursor..];
    if !rest.is_empty() {
        segments.push(ContentSegment::Markdown(rest));
    }

    segments
}

/// Names of every placeholder in `content`, in order, including repeats.
pub fn placeholders(content: &str) -> impl Iterator<Item = &str> {
    MARKER_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}

/// Placeholder names that `components` cannot resolve, deduplicated in
/// first-seen order.
pub fn unregistered_placeholders<'a, L>(content: &'a str, components: &L) -> Vec<&'a str>
where
    L: ComponentLookup + ?Sized,
{
    let mut missing: Vec<&str> = Vec::new();
    for name in placeholders(content) {
        if !components.contains(name) && !missing.contains(&name) {
            missing.push(name);
        }
    }
    missing
}
