//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                        - API index
//! - `GET  /health`                  - Store health check
//! - `POST /api/url/shorten`         - Create a short URL
//! - `GET  /api/url`                 - List all short URLs
//! - `GET  /api/url/{short_id}`      - Redirect
//! - `GET  /api/url/{short_id}/stats` - Statistics
//! - anything else                   - JSON 404 listing the routes above,
//!   including known paths called with the wrong method
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{fallback_handler, health_handler, index_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::utils::request_origin::SHORT_URL_PREFIX;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and request logging.
///
/// Paths are matched exactly; see [`app_router`] for the variant that also
/// accepts trailing slashes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .method_not_allowed_fallback(fallback_handler)
        .nest(SHORT_URL_PREFIX, api::routes::url_routes())
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service served by [`crate::server::run`].
///
/// Trailing slashes are trimmed before routing, so `/api/url/` reaches the
/// listing handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
