//! Short link creation with dedup by original URL.

use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{StoreError, UrlRepository};
use crate::error::AppError;
use crate::utils::id_generator::generate_short_id;
use crate::utils::url_validation::{UrlValidationError, validate_url};

/// Insert attempts before a colliding short id is reported as a conflict.
pub const MAX_ID_ATTEMPTS: usize = 5;

/// Result of a shorten request.
///
/// The two cases are visible to clients: a new resource (201) versus reuse
/// of an existing one (200).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenOutcome {
    Created(UrlRecord),
    Existing(UrlRecord),
}

impl ShortenOutcome {
    pub fn record(&self) -> &UrlRecord {
        match self {
            ShortenOutcome::Created(record) | ShortenOutcome::Existing(record) => record,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, ShortenOutcome::Created(_))
    }
}

/// Service for creating short links.
///
/// Submitting a URL that already has a record returns that record untouched;
/// otherwise a fresh identifier is minted and stored.
pub struct ShortenService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
    max_attempts: usize,
}

impl<R: UrlRepository + ?Sized> ShortenService<R> {
    /// Creates a new shorten service.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            max_attempts: MAX_ID_ATTEMPTS,
        }
    }

    /// Returns the record for `original_url`, creating it if needed.
    ///
    /// # Errors
    ///
    /// - [`AppError::MissingUrl`] if the input is empty
    /// - [`AppError::InvalidUrl`] if it is not an absolute URL
    /// - [`AppError::StorageConflict`] if every generated id collided
    /// - [`AppError::Storage`] on store failures
    pub async fn shorten(&self, original_url: &str) -> Result<ShortenOutcome, AppError> {
        validate_url(original_url).map_err(|e| match e {
            UrlValidationError::Empty => AppError::MissingUrl,
            UrlValidationError::InvalidFormat(reason) => AppError::invalid_url(original_url, reason),
        })?;

        if let Some(existing) = self
            .repository
            .find_by_original_url(original_url)
            .await?
        {
            return Ok(ShortenOutcome::Existing(existing));
        }

        let record = self.insert_with_fresh_id(original_url).await?;
        tracing::info!(short_id = %record.short_id, "URL shortened");

        Ok(ShortenOutcome::Created(record))
    }

    /// Inserts a record under a newly generated id, regenerating on collision.
    async fn insert_with_fresh_id(&self, original_url: &str) -> Result<UrlRecord, AppError> {
        for attempt in 1..=self.max_attempts {
            let new_record = NewUrlRecord::now(generate_short_id(), original_url.to_string());

            match self.repository.insert(new_record).await {
                Ok(record) => return Ok(record),
                Err(StoreError::DuplicateKey(short_id)) => {
                    tracing::warn!(%short_id, attempt, "Short id collision, regenerating");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::StorageConflict {
            attempts: self.max_attempts,
        })
    }
}
