//! Repository trait for url record storage.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a record store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A record with this short id already exists.
    #[error("duplicate short id: {0}")]
    DuplicateKey(String),

    /// No record has this short id.
    #[error("no record for short id: {0}")]
    NotFound(String),

    /// The store is unreachable or the operation failed.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Storage interface the services depend on.
///
/// The store is keyed by short id and keeps a secondary lookup by original URL.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds a record by the URL it was created for.
    ///
    /// If several records share the URL, the oldest one is returned.
    async fn find_by_original_url(&self, url: &str) -> Result<Option<UrlRecord>, StoreError>;

    /// Finds a record by its short id.
    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlRecord>, StoreError>;

    /// Inserts a new record with zero clicks.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] if the short id is taken.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, StoreError>;

    /// Atomically increments the click counter and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record matches.
    async fn increment_clicks(&self, short_id: &str) -> Result<UrlRecord, StoreError>;

    /// Returns every record, newest first.
    async fn list_all(&self) -> Result<Vec<UrlRecord>, StoreError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
