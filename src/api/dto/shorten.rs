//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Message returned when a submitted URL already has a short link.
pub const EXISTS_MESSAGE: &str = "URL already exists in the database";

/// Request to shorten a single URL.
///
/// `originalUrl` is optional at the serde level so a missing field reaches
/// validation and is reported as "URL is required" rather than a body error.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(rename = "originalUrl", default)]
    #[validate(
        required(code = "url_required", message = "URL is required"),
        length(min = 1, code = "url_required", message = "URL is required")
    )]
    pub original_url: Option<String>,
}

/// Response for a shorten request.
///
/// `status` is `"success"` for a newly created link and `"exists"` when an
/// existing link was reused; only the latter carries a `message`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,

    pub short_url: String,
}

impl ShortenResponse {
    pub fn created(short_url: String) -> Self {
        Self {
            status: "success",
            message: None,
            short_url,
        }
    }

    pub fn exists(short_url: String) -> Self {
        Self {
            status: "exists",
            message: Some(EXISTS_MESSAGE),
            short_url,
        }
    }
}
