//! API route configuration.

use crate::api::handlers::{
    fallback_handler, list_handler, redirect_handler, shorten_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short link routes, nested under `/api/url`.
///
/// # Endpoints
///
/// - `POST /shorten`           - Create (or reuse) a short URL
/// - `GET  /`                  - List all short URLs
/// - `GET  /{short_id}`        - Redirect and count a click
/// - `GET  /{short_id}/stats`  - Click count and metadata
///
/// `/shorten` is a static segment, so it takes priority over `/{short_id}`.
/// A known path with an unsupported method gets the same JSON 404 as an
/// unknown path.
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_handler))
        .route("/shorten", post(shorten_handler))
        .route("/{short_id}", get(redirect_handler))
        .route("/{short_id}/stats", get(stats_handler))
        .method_not_allowed_fallback(fallback_handler)
}
