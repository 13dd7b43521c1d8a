//! DTOs for the API index and the unknown-route response.

use serde::Serialize;
use std::collections::BTreeMap;

/// One documented endpoint.
#[derive(Debug, Serialize)]
pub struct EndpointDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static EndpointDoc>,
}

/// Body of the 404 fallback.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNotFoundResponse {
    pub status: &'static str,
    pub message: String,
    pub available_routes: BTreeMap<&'static str, String>,
}
