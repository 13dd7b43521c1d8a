//! API index and unknown-route handlers.

use axum::{
    Json,
    extract::OriginalUri,
    http::{Method, StatusCode},
};
use std::collections::BTreeMap;

use crate::api::dto::index::{EndpointDoc, IndexResponse, RouteNotFoundResponse};

/// Documented endpoints, shared by the index and the 404 fallback.
static ENDPOINTS: &[(&str, EndpointDoc)] = &[
    (
        "shortenUrl",
        EndpointDoc {
            method: "POST",
            path: "/api/url/shorten",
            description: "Create a short URL from {\"originalUrl\": string}",
        },
    ),
    (
        "redirect",
        EndpointDoc {
            method: "GET",
            path: "/api/url/{shortId}",
            description: "Redirect to the original URL (302) and count a click",
        },
    ),
    (
        "getUrlStats",
        EndpointDoc {
            method: "GET",
            path: "/api/url/{shortId}/stats",
            description: "Click count and metadata for a short URL",
        },
    ),
    (
        "getAllUrls",
        EndpointDoc {
            method: "GET",
            path: "/api/url/",
            description: "All short URLs, newest first",
        },
    ),
];

/// Describes the API.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Json<IndexResponse> {
    let endpoints = ENDPOINTS.iter().map(|(name, doc)| (*name, doc)).collect();

    Json(IndexResponse {
        status: "success",
        message: "URL Shortener API is running",
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
    })
}

/// Answers any unmatched route with 404 and the list of available routes.
///
/// Also installed as the method-not-allowed fallback. Inside `/api/url` the
/// request URI has the prefix stripped, so the full path is read from
/// [`OriginalUri`].
pub async fn fallback_handler(
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> (StatusCode, Json<RouteNotFoundResponse>) {
    let mut available_routes: BTreeMap<&'static str, String> = ENDPOINTS
        .iter()
        .map(|(name, doc)| (*name, format!("{} {}", doc.method, doc.path)))
        .collect();
    available_routes.insert("home", "GET /".to_string());

    (
        StatusCode::NOT_FOUND,
        Json(RouteNotFoundResponse {
            status: "error",
            message: format!("Route {} {} not found", method, uri.path()),
            available_routes,
        }),
    )
}
