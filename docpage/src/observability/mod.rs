//! Observability
//!
//! Structured logging for `docpage` commands and the preview server.

pub mod logging;

pub use logging::{LOG_LEVEL_ENV, LogFormat, init_logging, verbosity_to_directive};
