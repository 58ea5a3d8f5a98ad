//! Navigation context validation.
//!
//! Expansion state is keyed by item path, so sibling entries sharing a path
//! would toggle together. That is reported as an error; cosmetic problems
//! are warnings.

use std::collections::HashSet;

use super::item::{NavigationContext, NavigationEntry};
use crate::error::ValidationIssue;

/// Validates a navigation context.
///
/// Returns every issue found; an empty list means valid.
#[must_use]
pub fn validate_navigation(context: &NavigationContext) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if context.key.trim().is_empty() && !context.children.is_empty() {
        issues.push(ValidationIssue::warning(
            "navigation_context.key",
            "key is empty; the navigation root path will be '/'",
        ));
    }

    validate_level(&context.children, "navigation_context.children", &mut issues);
    issues
}

fn validate_level(entries: &[NavigationEntry], location: &str, issues: &mut Vec<ValidationIssue>) {
    let mut seen: HashSet<&str> = HashSet::new();

    for (index, entry) in entries.iter().enumerate() {
        let here = format!("{location}[{index}]");

        if !seen.insert(entry.path.as_str()) {
            issues.push(ValidationIssue::error(
                format!("{here}.path"),
                format!("duplicate sibling path \"{}\"", entry.path),
            ));
        }

        if !entry.path.starts_with('/') && entry.external_href.is_none() {
            issues.push(ValidationIssue::warning(
                format!("{here}.path"),
                format!("path \"{}\" does not start with '/'", entry.path),
            ));
        }

        if entry.title.trim().is_empty() {
            issues.push(ValidationIssue::warning(
                format!("{here}.title"),
                "title is empty",
            ));
        }

        if entry.external_href.is_some() && !entry.children.is_empty() {
            issues.push(ValidationIssue::warning(
                format!("{here}.children"),
                "external entries render as links; children are ignored",
            ));
            continue;
        }

        validate_level(&entry.children, &format!("{here}.children"), issues);
    }
}
