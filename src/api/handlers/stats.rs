//! Handler for per-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::url::{DataResponse, UrlDetails};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::RequestOrigin;

/// Returns metadata and the click count for a short link.
///
/// # Endpoint
///
/// `GET /api/url/{short_id}/stats`
///
/// # Response
///
/// ```json
/// {
///   "status": "success",
///   "data": {
///     "shortId": "Xk3_a9Qz",
///     "originalUrl": "https://example.com",
///     "shortUrl": "http://localhost:5000/api/url/Xk3_a9Qz",
///     "clicks": 12,
///     "createdAt": "2025-01-01T12:00:00Z"
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short id doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(short_id): Path<String>,
    origin: RequestOrigin,
) -> Result<Json<DataResponse<UrlDetails>>, AppError> {
    let record = state.stats_service.get_stats(&short_id).await?;

    Ok(Json(DataResponse::success(UrlDetails::from_record(
        record, &origin,
    ))))
}
