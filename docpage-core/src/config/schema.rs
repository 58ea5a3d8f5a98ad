//! Site configuration types.
//!
//! Deserialized from `docpage.yaml`. Every field has a default so a
//! missing or empty file yields a usable configuration.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::navigation::position::{
    DEFAULT_BOTTOM_TOLERANCE, DEFAULT_FIXED_HEADER_OFFSET, Thresholds,
};

/// Default `chrono` format for the "last updated" note.
pub const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";

/// Site-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Source repository as `owner/name`; enables the report-issue link.
    #[serde(default, alias = "gitHubRepository")]
    pub github_repository: Option<String>,

    /// Height reserved for the persistent page header, in pixels.
    #[serde(default = "default_fixed_header_offset")]
    pub fixed_header_offset: f64,

    /// Slack allowed when deciding the navigation reached its container bottom.
    #[serde(default = "default_bottom_tolerance")]
    pub bottom_tolerance: f64,

    /// `chrono` format string applied to raw `last_updated` timestamps.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Localisable labels.
    #[serde(default)]
    pub strings: SiteStrings,

    /// Placeholder name to HTML fragment file, relative to the config file.
    #[serde(default)]
    pub components: IndexMap<String, PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            github_repository: None,
            fixed_header_offset: DEFAULT_FIXED_HEADER_OFFSET,
            bottom_tolerance: DEFAULT_BOTTOM_TOLERANCE,
            date_format: default_date_format(),
            strings: SiteStrings::default(),
            components: IndexMap::new(),
        }
    }
}

impl SiteConfig {
    /// Scroll thresholds derived from this configuration.
    #[must_use]
    pub const fn thresholds(&self) -> Thresholds {
        Thresholds {
            header_offset: self.fixed_header_offset,
            bottom_tolerance: self.bottom_tolerance,
        }
    }

    /// Returns the configured repository, ignoring blank values.
    #[must_use]
    pub fn repository(&self) -> Option<&str> {
        self.github_repository
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}

/// Localisable labels used by the page template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteStrings {
    /// Prefix for the "last updated" note.
    pub last_updated: String,
    /// Label of the report-issue link.
    pub report_an_issue: String,
}

impl Default for SiteStrings {
    fn default() -> Self {
        Self {
            last_updated: "Last updated".to_string(),
            report_an_issue: "Report an issue".to_string(),
        }
    }
}

const fn default_fixed_header_offset() -> f64 {
    DEFAULT_FIXED_HEADER_OFFSET
}

const fn default_bottom_tolerance() -> f64 {
    DEFAULT_BOTTOM_TOLERANCE
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: SiteConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert!(config.repository().is_none());
        assert_eq!(config.strings.report_an_issue, "Report an issue");
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r"
github_repository: input-output-hk/docs
fixed_header_offset: 80
bottom_tolerance: 10
date_format: '%Y-%m-%d'
strings:
  last_updated: Zuletzt aktualisiert
components:
  Faq: components/faq.html
  Roadmap: components/roadmap.html
";
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.repository(), Some("input-output-hk/docs"));
        assert!((config.thresholds().header_offset - 80.0).abs() < f64::EPSILON);
        assert!((config.thresholds().bottom_tolerance - 10.0).abs() < f64::EPSILON);
        assert_eq!(config.strings.last_updated, "Zuletzt aktualisiert");
        assert_eq!(config.strings.report_an_issue, "Report an issue");
        let names: Vec<&str> = config.components.keys().map(String::as_str).collect();
        assert_eq!(names, ["Faq", "Roadmap"]);
    }

    #[test]
    fn test_camel_case_repository_alias() {
        let config: SiteConfig = serde_yaml::from_str("gitHubRepository: a/b").unwrap();
        assert_eq!(config.repository(), Some("a/b"));
    }

    #[test]
    fn test_blank_repository_is_none() {
        let config: SiteConfig = serde_yaml::from_str("github_repository: '  '").unwrap();
        assert!(config.repository().is_none());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<SiteConfig, _> = serde_yaml::from_str("github_repo: a/b");
        assert!(result.is_err());
    }
}
