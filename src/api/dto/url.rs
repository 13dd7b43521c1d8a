//! DTOs for link statistics and listing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlRecord;
use crate::utils::request_origin::RequestOrigin;

/// Success envelope: `{"status": "success", "data": ...}`.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

/// Public view of a url record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlDetails {
    pub short_id: String,
    pub original_url: String,
    pub short_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl UrlDetails {
    /// Builds the view, deriving `shortUrl` from the request origin.
    pub fn from_record(record: UrlRecord, origin: &RequestOrigin) -> Self {
        Self {
            short_url: origin.short_url(&record.short_id),
            short_id: record.short_id,
            original_url: record.original_url,
            clicks: record.clicks,
            created_at: record.created_at,
        }
    }
}

/// Payload of the listing endpoint.
#[derive(Debug, Serialize)]
pub struct UrlListData {
    pub count: usize,
    pub urls: Vec<UrlDetails>,
}
