//! Active-path matching.
//!
//! An item is active when the current location starts with the item's
//! path under the page language, e.g. `/en/docs/guides` is active for
//! `/en/docs/guides/install`. Matching is a plain case-sensitive prefix test.

use std::borrow::Cow;

/// Prefixes `path` with `/{lang}` when a language is set.
#[must_use]
pub fn resolve_path<'a>(lang: &str, path: &'a str) -> Cow<'a, str> {
    if lang.is_empty() {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{lang}{path}"))
    }
}

/// Returns `true` if `current_path` lies under `path` for `lang`.
#[must_use]
pub fn is_active(current_path: &str, lang: &str, path: &str) -> bool {
    current_path.starts_with(resolve_path(lang, path).as_ref())
}
