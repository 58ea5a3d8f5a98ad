//! `render` command: one page context to one HTML document.

use std::io::Write;

use docpage_core::page::Location;
use docpage_render::PageRenderer;
use tracing::{info, warn};

use crate::cli::args::RenderArgs;
use crate::config::loader::{load_page_context, load_site_config};
use crate::error::DocpageError;

/// Render a page to stdout or `--output`.
///
/// # Errors
///
/// Returns a config error if the site configuration or page cannot be
/// loaded, or an I/O error if the output cannot be written.
pub fn run(args: &RenderArgs) -> Result<(), DocpageError> {
    let site = load_site_config(args.config.as_deref())?;
    for warning in &site.warnings {
        warn!(location = %warning.path, "{}", warning.message);
    }
    let components = site.components()?;
    let renderer = PageRenderer::new(site.config, components);

    let page = load_page_context(&args.page)?;
    for issue in page.validate() {
        warn!(location = %issue.path, page = %args.page.display(), "{}", issue.message);
    }

    let location = args
        .location
        .as_deref()
        .map_or_else(|| page.default_location(), Location::parse);

    let html = renderer.render(&page, &location);

    if let Some(path) = &args.output {
        std::fs::write(path, &html)?;
        info!(page = %args.page.display(), output = %path.display(), %location, "page rendered");
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(html.as_bytes())?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
    }

    Ok(())
}
