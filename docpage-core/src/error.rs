//! Core error types for `docpage`
//!
//! Configuration and validation error types shared across the workspace.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Site configuration and page-context loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML or JSON parsing failed
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    ParseError {
        /// Path to the file being parsed
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Validation failed
    #[error("validation failed for {path}")]
    ValidationError {
        /// Path to the validated file
        path: String,
        /// List of validation issues found
        errors: Vec<ValidationIssue>,
    },

    /// Referenced file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// File exists but could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },

    /// Unsupported file extension for a page context
    #[error("unsupported page format for {path}: expected .yaml, .yml or .json")]
    UnsupportedFormat {
        /// Path with the unrecognised extension
        path: PathBuf,
    },
}

impl ConfigError {
    /// Classifies a read failure on `path`: `NotFound` becomes
    /// [`ConfigError::MissingFile`], anything else keeps its source in
    /// [`ConfigError::Io`].
    #[must_use]
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::MissingFile { path }
        } else {
            Self::Io { path, source }
        }
    }
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found in a config file or page context.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationIssue {
    /// Dotted path to the problematic field (e.g. `navigation_context.children[2]`)
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl ValidationIssue {
    /// Creates an error-level issue.
    #[must_use]
    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Creates a warning-level issue.
    #[must_use]
    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    /// Returns `true` for error-level issues.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Prevents the file from being used
    Error,
    /// Reported but does not block rendering
    Warning,
}
