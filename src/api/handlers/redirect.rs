//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /api/url/{short_id}`
///
/// # Request Flow
///
/// 1. Increment the click counter in the store
/// 2. Return 302 Found with `Location` set to the original URL
///
/// The redirect is only sent after the click has been stored.
///
/// # Errors
///
/// Returns 404 Not Found if the short id doesn't exist, 500 if the store fails.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(short_id): Path<String>,
) -> Result<Response, AppError> {
    let original_url = state.redirect_service.resolve(&short_id).await?;
    let location = location_header(&original_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds the `Location` value.
///
/// ASCII URLs are sent as stored; anything else is sent in its serialized
/// form (punycode host, percent-encoded path).
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    if original_url.is_ascii()
        && let Ok(value) = HeaderValue::from_str(original_url)
    {
        return Ok(value);
    }

    Url::parse(original_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            AppError::Storage(format!("stored URL is not redirectable: {original_url}"))
        })
}
