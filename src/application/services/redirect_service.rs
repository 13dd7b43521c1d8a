//! Short id resolution with click counting.

use std::sync::Arc;

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Service resolving short ids to their original URLs.
///
/// Every successful resolution counts one click. The counter is bumped in the
/// store before the URL is returned, so a redirect never happens without its
/// click being recorded.
pub struct RedirectService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UrlRepository + ?Sized> RedirectService<R> {
    /// Creates a new redirect service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Records a click and returns the original URL.
    ///
    /// The atomic increment doubles as the lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is unknown and
    /// [`AppError::Storage`] if the increment fails.
    pub async fn resolve(&self, short_id: &str) -> Result<String, AppError> {
        let record = self.repository.increment_clicks(short_id).await?;

        tracing::debug!(short_id, clicks = record.clicks, "Click recorded");

        Ok(record.original_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UrlRecord;
    use crate::domain::repositories::{MockUrlRepository, StoreError};
    use chrono::Utc;

    #[tokio::test]
    async fn test_resolve_increments_and_returns_url() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_increment_clicks()
            .withf(|id| id == "abcd1234")
            .times(1)
            .returning(|id| {
                Ok(UrlRecord::new(
                    id.to_string(),
                    "https://example.com/target?x=1".to_string(),
                    1,
                    Utc::now(),
                ))
            });

        let service = RedirectService::new(Arc::new(mock_repo));

        let url = service.resolve("abcd1234").await.unwrap();

        assert_eq!(url, "https://example.com/target?x=1");
    }

    #[tokio::test]
    async fn test_resolve_unknown_id() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_increment_clicks()
            .returning(|id| Err(StoreError::NotFound(id.to_string())));

        let service = RedirectService::new(Arc::new(mock_repo));

        let result = service.resolve("zzzzzzzz").await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_resolve_failed_increment_does_not_redirect() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_increment_clicks()
            .returning(|_| Err(StoreError::Backend("timeout".into())));
        mock_repo.expect_find_by_short_id().times(0);

        let service = RedirectService::new(Arc::new(mock_repo));

        let result = service.resolve("abcd1234").await;

        assert!(matches!(result, Err(AppError::Storage(_))));
    }
}
