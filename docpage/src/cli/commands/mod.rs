//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod render;
pub mod serve;
pub mod validate;
pub mod version;

use tokio_util::sync::CancellationToken;

use crate::cli::args::{Cli, Commands};
use crate::error::DocpageError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// `cancel` fires on the first SIGINT/SIGTERM; only `serve` waits on it.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli, cancel: CancellationToken) -> Result<(), DocpageError> {
    match cli.command {
        Commands::Render(args) => render::run(&args),
        Commands::Validate(args) => validate::run(&args),
        Commands::Serve(args) => serve::run(&args, cancel).await,
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}
