//! Local preview server
//!
//! Serves rendered pages over HTTP, one route per page context:
//!
//! - `GET /healthz` → `ok`
//! - `GET /{path}` → the page whose route matches `path`, rendered with the
//!   request path and query as its location
//!
//! Unknown routes return 404. Pages always render; a malformed repository
//! only drops the report-issue link.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use docpage_core::page::{Location, PageContext};
use docpage_render::PageRenderer;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::error::ServerError;

/// Shared state behind every request.
#[derive(Debug)]
pub struct AppState {
    /// Renderer for the site.
    pub renderer: PageRenderer,
    /// Page contexts keyed by normalized route.
    pub pages: HashMap<String, PageContext>,
}

impl AppState {
    /// Looks up the page served at `path`, tolerating a trailing slash.
    #[must_use]
    pub fn page(&self, path: &str) -> Option<&PageContext> {
        self.pages.get(&normalize_route(path))
    }
}

/// Normalizes a route for lookup: trailing slashes are dropped, the root
/// stays `/`.
#[must_use]
pub fn normalize_route(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

// ============================================================================
// Axum Router
// ============================================================================

/// Builds the preview router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(handle_health))
        .route("/", get(handle_page))
        .route("/{*path}", get(handle_page))
        .with_state(state)
}

async fn handle_health() -> &'static str {
    "ok"
}

async fn handle_page(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let Some(page) = state.page(uri.path()) else {
        debug!(path = uri.path(), "no page for route");
        return (StatusCode::NOT_FOUND, "page not found").into_response();
    };

    let location = Location {
        pathname: uri.path().to_string(),
        query: uri.query().map(|q| format!("?{q}")),
        hash: None,
    };

    Html(state.renderer.render(page, &location)).into_response()
}

// ============================================================================
// Serving
// ============================================================================

/// Parses a bind address, accepting `:port` and bare `port` shorthands
/// (bound on all interfaces).
///
/// # Errors
///
/// Returns [`ServerError::InvalidAddress`] if the result is not a socket
/// address.
pub fn parse_bind_addr(input: &str) -> Result<SocketAddr, ServerError> {
    let addr = if input.starts_with(':') {
        format!("0.0.0.0{input}")
    } else if input.parse::<u16>().is_ok() {
        format!("0.0.0.0:{input}")
    } else {
        input.to_string()
    };
    addr.parse::<SocketAddr>()
        .map_err(|e| ServerError::InvalidAddress {
            input: input.to_string(),
            message: e.to_string(),
        })
}

/// Binds a listener on `addr`.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the address is unavailable.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })
}

/// Serves `state` on `listener` until `cancel` fires.
///
/// # Errors
///
/// Returns [`ServerError::Serve`] if the server loop fails.
pub async fn serve(
    listener: TcpListener,
    state: Arc<AppState>,
    cancel: CancellationToken,
) -> Result<(), ServerError> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, pages = state.pages.len(), "preview server listening");
    }

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await
        .map_err(ServerError::Serve)?;

    debug!("preview server shut down");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
