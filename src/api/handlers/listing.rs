//! Handler for listing all short links.

use axum::{Json, extract::State};

use crate::api::dto::url::{DataResponse, UrlDetails, UrlListData};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::RequestOrigin;

/// Lists every short link, newest first.
///
/// # Endpoint
///
/// `GET /api/url/`
///
/// # Response
///
/// `{"status": "success", "data": {"count": N, "urls": [...]}}` where each
/// item has the same fields as the stats endpoint.
pub async fn list_handler(
    State(state): State<AppState>,
    origin: RequestOrigin,
) -> Result<Json<DataResponse<UrlListData>>, AppError> {
    let urls: Vec<UrlDetails> = state
        .listing_service
        .list_all()
        .await?
        .into_iter()
        .map(|record| UrlDetails::from_record(record, &origin))
        .collect();

    Ok(Json(DataResponse::success(UrlListData {
        count: urls.len(),
        urls,
    })))
}
