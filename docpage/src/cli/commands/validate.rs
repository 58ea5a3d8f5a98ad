//! `validate` command: check page contexts without rendering.
//!
//! Each page is loaded and checked for navigation problems and for
//! placeholders with no registered component. Load failures are reported
//! as errors for that page instead of aborting the run.

use std::path::{Path, PathBuf};

use docpage_core::error::ValidationIssue;
use docpage_render::content::ComponentRegistry;
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::loader::{load_page_context, load_site_config};
use crate::config::validation::validate_page;
use crate::error::DocpageError;

/// Validation outcome for one page context file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// File that was checked.
    pub path: PathBuf,
    /// `true` when no errors were found.
    pub valid: bool,
    /// Error-level issues.
    pub errors: Vec<ValidationIssue>,
    /// Warning-level issues.
    pub warnings: Vec<ValidationIssue>,
}

/// Validate every `--page` against the site configuration.
///
/// # Errors
///
/// Returns a config error if the site configuration is invalid, or
/// [`DocpageError::Validation`] if any page has errors.
pub fn run(args: &ValidateArgs) -> Result<(), DocpageError> {
    let site = load_site_config(args.config.as_deref())?;
    for warning in &site.warnings {
        warn!(location = %warning.path, "{}", warning.message);
    }
    let components = site.components()?;

    let reports: Vec<FileReport> = args
        .pages
        .iter()
        .map(|path| check_file(path, &components, args.strict))
        .collect();

    match args.format {
        OutputFormat::Human => print_human(&reports),
        OutputFormat::Json => print_json(&reports)?,
    }

    let failed = reports.iter().filter(|r| !r.valid).count();
    if failed > 0 {
        return Err(DocpageError::Validation {
            failed,
            total: reports.len(),
        });
    }

    info!(pages = reports.len(), "all pages valid");
    Ok(())
}

/// Validates one file. With `strict`, warnings count as errors.
#[must_use]
pub fn check_file(path: &Path, components: &ComponentRegistry, strict: bool) -> FileReport {
    let (mut errors, mut warnings) = match load_page_context(path) {
        Ok(page) => {
            let result = validate_page(&page, components);
            (result.errors, result.warnings)
        }
        Err(e) => (
            vec![ValidationIssue::error(path.display().to_string(), e.to_string())],
            Vec::new(),
        ),
    };

    if strict {
        errors.extend(warnings.drain(..).map(|w| ValidationIssue::error(w.path, w.message)));
    }

    FileReport {
        path: path.to_path_buf(),
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

fn print_human(reports: &[FileReport]) {
    for report in reports {
        let status = if report.valid { "ok" } else { "FAILED" };
        println!("{}: {status}", report.path.display());
        for issue in report.errors.iter().chain(&report.warnings) {
            println!("  {issue}");
        }
    }
}

fn print_json(reports: &[FileReport]) -> Result<(), DocpageError> {
    let errors: usize = reports.iter().map(|r| r.errors.len()).sum();
    let warnings: usize = reports.iter().map(|r| r.warnings.len()).sum();
    let output = json!({
        "files": reports,
        "summary": {
            "files": reports.len(),
            "errors": errors,
            "warnings": warnings,
        },
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
