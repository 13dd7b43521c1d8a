//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::application::services::ShortenOutcome;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::RequestOrigin;

/// Creates a short URL, or returns the existing one for a known URL.
///
/// # Endpoint
///
/// `POST /api/url/shorten`
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// - **201 Created**: `{"status": "success", "shortUrl": "..."}`
/// - **200 OK**: `{"status": "exists", "message": "...", "shortUrl": "..."}`
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or the URL is missing or
/// invalid, and 500 if the store fails or no free short id could be found.
pub async fn shorten_handler(
    State(state): State<AppState>,
    origin: RequestOrigin,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let original_url = payload.original_url.unwrap_or_default();
    let outcome = state.shorten_service.shorten(&original_url).await?;

    let short_url = origin.short_url(&outcome.record().short_id);

    Ok(match outcome {
        ShortenOutcome::Created(_) => (
            StatusCode::CREATED,
            Json(ShortenResponse::created(short_url)),
        ),
        ShortenOutcome::Existing(_) => (StatusCode::OK, Json(ShortenResponse::exists(short_url))),
    })
}
