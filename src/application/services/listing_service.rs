//! Listing of all short links.

use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Service returning every record, newest first.
///
/// No pagination: the whole collection is scanned on each call.
pub struct ListingService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UrlRepository + ?Sized> ListingService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on store errors.
    pub async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        Ok(self.repository.list_all().await?)
    }
}
