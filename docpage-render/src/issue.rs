//! GitHub "report an issue" link.

use docpage_core::page::Location;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::RenderError;

/// Label applied to content issues.
pub const ISSUE_LABEL: &str = "content";

/// Issue template file in the repository.
pub const ISSUE_TEMPLATE: &str = "content-issue.md";

/// Characters escaped in the issue title: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, the set browsers leave alone in a URI
/// component.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Returns `true` if `repository` has the `owner/name` shape.
///
/// Both parts are non-empty and limited to ASCII letters, digits, `-`, `_`
/// and `.`.
#[must_use]
pub fn is_valid_repository(repository: &str) -> bool {
    let valid_part = |part: &str| {
        !part.is_empty()
            && part
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    };
    let mut parts = repository.split('/');
    matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(owner), Some(name), None) if valid_part(owner) && valid_part(name)
    )
}

/// Percent-encodes `value` as a URI component.
#[must_use]
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Builds the new-issue URL for the page at `location`.
///
/// The issue title is `Invalid content {pathname}{query}{hash}`, encoded as
/// a URI component.
///
/// # Errors
///
/// Returns [`RenderError::InvalidRepository`] when `repository` is not
/// `owner/name`.
pub fn report_issue_href(repository: &str, location: &Location) -> Result<String, RenderError> {
    if !is_valid_repository(repository) {
        return Err(RenderError::InvalidRepository {
            repository: repository.to_string(),
        });
    }

    Ok(format!(
        "https://github.com/{repository}/issues/new?assignees=&labels={ISSUE_LABEL}&template={ISSUE_TEMPLATE}&title={}",
        encode_uri_component(&format!("Invalid content {location}"))
    ))
}
