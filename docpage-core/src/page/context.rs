//! Article page context.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::location::Location;
use crate::error::ValidationIssue;
use crate::navigation::item::NavigationContext;
use crate::navigation::validate::validate_navigation;

/// Everything the data layer supplies to render one article.
///
/// Field names are snake_case; the camelCase names used by JavaScript site
/// generators are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    /// Document title.
    #[serde(alias = "pageTitle")]
    pub page_title: String,

    /// Raw markdown body, possibly containing component placeholders.
    pub content: String,

    /// Section navigation.
    #[serde(default, alias = "navigationContext")]
    pub navigation_context: NavigationContext,

    /// Pre-formatted "last updated" text.
    #[serde(default, alias = "lastUpdatedFormatted")]
    pub last_updated_formatted: Option<String>,

    /// Raw "last updated" timestamp, formatted when no pre-formatted text is given.
    #[serde(default, alias = "lastUpdated")]
    pub last_updated: Option<DateTime<Utc>>,

    /// Language tag, e.g. `en`. Empty for unprefixed sites.
    #[serde(default)]
    pub lang: String,

    /// Route the page is served at.
    #[serde(default)]
    pub path: Option<String>,
}

impl PageContext {
    /// Returns `true` if the page has navigation to show.
    #[must_use]
    pub fn has_navigation(&self) -> bool {
        !self.navigation_context.is_empty()
    }

    /// Text for the "last updated" note, if any.
    ///
    /// Pre-formatted text wins; otherwise the raw timestamp is formatted with
    /// `date_format`. Returns `None` when neither is present or the format is
    /// invalid.
    #[must_use]
    pub fn last_updated_label(&self, date_format: &str) -> Option<String> {
        if let Some(formatted) = self
            .last_updated_formatted
            .as_deref()
            .filter(|s| !s.trim().is_empty())
        {
            return Some(formatted.to_string());
        }
        self.last_updated
            .as_ref()
            .and_then(|ts| format_timestamp(ts, date_format))
    }

    /// Location used when none is supplied: the page's own route, or the
    /// section root under the page language.
    #[must_use]
    pub fn default_location(&self) -> Location {
        if let Some(path) = self.path.as_deref() {
            return Location::parse(path);
        }
        let key = &self.navigation_context.key;
        if self.lang.is_empty() {
            Location::new(format!("/{key}"))
        } else {
            Location::new(format!("/{}/{key}", self.lang))
        }
    }

    /// Validates the page context, including its navigation.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if self.page_title.trim().is_empty() {
            issues.push(ValidationIssue::warning("page_title", "page title is empty"));
        }
        if let Some(path) = self.path.as_deref() {
            if !path.starts_with('/') {
                issues.push(ValidationIssue::error(
                    "path",
                    format!("route \"{path}\" must start with '/'"),
                ));
            }
        }
        issues.extend(validate_navigation(&self.navigation_context));
        issues
    }
}

/// Formats a timestamp with a `chrono` format string.
///
/// Returns `None` instead of panicking when the format string is invalid.
#[must_use]
pub fn format_timestamp(ts: &DateTime<Utc>, date_format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", ts.format(date_format)).ok()?;
    Some(out)
}
