//! Click statistics for a single short link.

use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Service for reading a record's metadata and click count.
pub struct StatsService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UrlRepository + ?Sized> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves the record for a short id without side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the id.
    /// Returns [`AppError::Storage`] on store errors.
    pub async fn get_stats(&self, short_id: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_short_id(short_id)
            .await?
            .ok_or_else(|| AppError::not_found(short_id))
    }
}
