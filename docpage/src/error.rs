//! Error types for `docpage`
//!
//! Aggregates the core errors and maps every failure onto a process exit
//! code.

use thiserror::Error;

pub use docpage_core::error::{ConfigError, Severity, ValidationIssue};

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `docpage` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid YAML/JSON, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Preview server error (bind failed, invalid address)
    pub const SERVER_ERROR: i32 = 4;

    /// Usage error (invalid arguments)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `docpage` operations.
#[derive(Debug, Error)]
pub enum DocpageError {
    /// Site config or page context loading/validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Preview server error
    #[error(transparent)]
    Server(#[from] ServerError),

    /// `validate` found errors
    #[error("validation failed: {failed} of {total} page(s) have errors")]
    Validation {
        /// Pages with at least one error
        failed: usize,
        /// Pages checked
        total: usize,
    },

    /// Invalid combination of arguments
    #[error("usage error: {0}")]
    Usage(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DocpageError {
    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(ConfigError::Io { .. }) | Self::Io(_) => ExitCode::IO_ERROR,
            Self::Config(_) | Self::Validation { .. } | Self::Json(_) => ExitCode::CONFIG_ERROR,
            Self::Server(_) => ExitCode::SERVER_ERROR,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
        }
    }
}

// ============================================================================
// Server Errors
// ============================================================================

/// Preview server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Bind address could not be parsed
    #[error("invalid bind address \"{input}\": {message}")]
    InvalidAddress {
        /// Address as given
        input: String,
        /// Parser message
        message: String,
    },

    /// Listener could not be bound
    #[error("bind failed on {addr}: {source}")]
    Bind {
        /// Address that failed
        addr: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// Server loop failed
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
