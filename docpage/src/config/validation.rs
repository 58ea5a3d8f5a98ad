//! Site configuration and page context validation
//!
//! Validation collects every issue instead of stopping at the first, so a
//! single run reports everything wrong with a file.

use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use docpage_core::config::SiteConfig;
use docpage_core::error::ValidationIssue;
use docpage_core::page::PageContext;
use docpage_render::content::{ComponentLookup, unregistered_placeholders};
use docpage_render::issue::is_valid_repository;

// ============================================================================
// Public API
// ============================================================================

/// Result of configuration validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (prevent loading).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Site configuration validator.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `config`; component files resolve against `base_dir`.
    pub fn validate(&mut self, config: &SiteConfig, base_dir: &Path) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        self.validate_repository(config);
        self.validate_thresholds(config);
        self.validate_date_format(&config.date_format);
        self.validate_strings(config);
        self.validate_components(config, base_dir);

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    // ========================================================================
    // Checks
    // ========================================================================

    fn validate_repository(&mut self, config: &SiteConfig) {
        let Some(repo) = config.github_repository.as_deref() else {
            return;
        };
        if repo.trim().is_empty() {
            self.add_warning(
                "github_repository",
                "repository is blank; the report-issue link is disabled",
            );
        } else if !is_valid_repository(repo.trim()) {
            self.add_error(
                "github_repository",
                format!("\"{repo}\" is not an owner/name repository"),
            );
        }
    }

    fn validate_thresholds(&mut self, config: &SiteConfig) {
        for (field, value) in [
            ("fixed_header_offset", config.fixed_header_offset),
            ("bottom_tolerance", config.bottom_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                self.add_error(field, format!("{value} must be a finite, non-negative number"));
            }
        }
    }

    fn validate_date_format(&mut self, format: &str) {
        if format.trim().is_empty() {
            self.add_error("date_format", "date format cannot be empty");
        } else if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            self.add_error("date_format", format!("\"{format}\" is not a valid date format"));
        }
    }

    fn validate_strings(&mut self, config: &SiteConfig) {
        if config.strings.last_updated.trim().is_empty() {
            self.add_warning("strings.last_updated", "label is empty");
        }
        if config.strings.report_an_issue.trim().is_empty() {
            self.add_warning("strings.report_an_issue", "label is empty");
        }
    }

    fn validate_components(&mut self, config: &SiteConfig, base_dir: &Path) {
        for (name, file) in &config.components {
            let path = format!("components.{name}");
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
                self.add_error(
                    &path,
                    format!("component name \"{name}\" must contain ASCII letters only"),
                );
            }
            if !base_dir.join(file).is_file() {
                self.add_error(
                    &path,
                    format!("component file {} does not exist", file.display()),
                );
            }
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn add_error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationIssue::error(path, message));
    }

    fn add_warning(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationIssue::warning(path, message));
    }
}

/// Validates one page context against the registered components.
///
/// Placeholders with no registered component are reported as warnings at
/// `content`; they render as nothing.
#[must_use]
pub fn validate_page<L>(page: &PageContext, components: &L) -> ValidationResult
where
    L: ComponentLookup + ?Sized,
{
    let (errors, mut warnings): (Vec<_>, Vec<_>) =
        page.validate().into_iter().partition(ValidationIssue::is_error);

    for name in unregistered_placeholders(&page.content, components) {
        warnings.push(ValidationIssue::warning(
            "content",
            format!("placeholder \"{name}\" has no registered component"),
        ));
    }

    ValidationResult { errors, warnings }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn config(yaml: &str) -> SiteConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_default_config_is_valid() {
        let result = Validator::new().validate(&SiteConfig::default(), Path::new("."));
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_repository_checks() {
        let bad = Validator::new().validate(&config("github_repository: a/b/c"), Path::new("."));
        assert_eq!(bad.errors.len(), 1);
        assert_eq!(bad.errors[0].path, "github_repository");

        let blank = Validator::new().validate(&config("github_repository: ' '"), Path::new("."));
        assert!(blank.is_valid());
        assert_eq!(blank.warnings.len(), 1);
    }

    #[test]
    fn test_negative_offset_rejected() {
        let result = Validator::new().validate(
            &config("fixed_header_offset: -1\nbottom_tolerance: .nan"),
            Path::new("."),
        );
        let paths: Vec<&str> = result.errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["fixed_header_offset", "bottom_tolerance"]);
    }

    #[test]
    fn test_date_format() {
        let bad = Validator::new().validate(&config("date_format: '%Y-%'"), Path::new("."));
        assert_eq!(bad.errors[0].path, "date_format");

        let ok = Validator::new().validate(&config("date_format: '%Y-%m-%d'"), Path::new("."));
        assert!(ok.is_valid());
    }

    #[test]
    fn test_empty_labels_warn() {
        let result = Validator::new().validate(
            &config("strings:\n  last_updated: ''\n  report_an_issue: ''"),
            Path::new("."),
        );
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_component_checks() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("faq.html"), "<p>faq</p>").unwrap();

        let mut site = SiteConfig::default();
        site.components.insert("Faq".to_string(), PathBuf::from("faq.html"));
        site.components.insert("Bad_Name".to_string(), PathBuf::from("faq.html"));
        site.components.insert("Gone".to_string(), PathBuf::from("gone.html"));

        let result = Validator::new().validate(&site, dir.path());
        let paths: Vec<&str> = result.errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["components.Bad_Name", "components.Gone"]);
    }

    #[test]
    fn test_validate_page_reports_unregistered() {
        let page: PageContext = serde_yaml::from_str(
            "page_title: T\ncontent: |\n  <!-- include components/Faq -->\n  <!-- include components/Gone -->\n  <!-- include components/Gone -->\n",
        )
        .unwrap();
        let registered: HashSet<&str> = HashSet::from(["Faq"]);

        let result = validate_page(&page, &registered);
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].path, "content");
        assert!(result.warnings[0].message.contains("Gone"));
    }

    #[test]
    fn test_validate_page_splits_errors() {
        let page: PageContext =
            serde_yaml::from_str("page_title: ''\ncontent: x\npath: relative").unwrap();
        let result = validate_page(&page, &HashSet::<String>::new());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].path, "path");
        assert_eq!(result.warnings.len(), 1);
    }
}
