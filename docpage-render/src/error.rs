//! Render error types.

use thiserror::Error;

/// Errors raised while building optional page affordances.
///
/// Page rendering itself never fails; a failed affordance is logged and
/// left out of the output.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Repository is not in `owner/name` form
    #[error("invalid repository '{repository}': expected owner/name")]
    InvalidRepository {
        /// The configured value
        repository: String,
    },
}
