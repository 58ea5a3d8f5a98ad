//! `serve` command: preview a directory of pages over HTTP.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use docpage_core::page::PageContext;
use docpage_render::PageRenderer;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::cli::args::ServeArgs;
use crate::config::loader::{load_pages_dir, load_site_config};
use crate::error::DocpageError;
use crate::server::{self, AppState, normalize_route};

/// Load every page under `--pages` and serve them until cancelled.
///
/// # Errors
///
/// Returns a usage error if `--pages` is not a directory, a config error if
/// loading fails, or a server error if the address is invalid or in use.
pub async fn run(args: &ServeArgs, cancel: CancellationToken) -> Result<(), DocpageError> {
    if !args.pages.is_dir() {
        return Err(DocpageError::Usage(format!(
            "--pages must be a directory: {}",
            args.pages.display()
        )));
    }
    let addr = server::parse_bind_addr(&args.bind)?;

    let site = load_site_config(args.config.as_deref())?;
    for warning in &site.warnings {
        warn!(location = %warning.path, "{}", warning.message);
    }
    let components = site.components()?;

    let pages = route_pages(load_pages_dir(&args.pages)?);
    if pages.is_empty() {
        warn!(dir = %args.pages.display(), "no page contexts found");
    }

    let state = Arc::new(AppState {
        renderer: PageRenderer::new(site.config, components),
        pages,
    });

    let listener = server::bind(addr).await?;
    info!(%addr, "serving pages, press Ctrl+C to stop");
    server::serve(listener, state, cancel).await?;
    Ok(())
}

/// Keys pages by route. The first file claiming a route wins.
#[must_use]
pub fn route_pages(loaded: Vec<(PathBuf, PageContext)>) -> HashMap<String, PageContext> {
    let mut pages = HashMap::with_capacity(loaded.len());
    for (file, page) in loaded {
        let route = normalize_route(&page.default_location().pathname);
        if pages.contains_key(&route) {
            warn!(%route, file = %file.display(), "duplicate route, page ignored");
            continue;
        }
        info!(%route, file = %file.display(), "page loaded");
        pages.insert(route, page);
    }
    pages
}
