//! PostgreSQL implementation of the url repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{StoreError, UrlRepository};

/// Unique constraint on `urls.short_id`.
const SHORT_ID_CONSTRAINT: &str = "urls_short_id_key";

/// Row shape shared by every query in this repository.
#[derive(Debug, FromRow)]
struct UrlRow {
    short_id: String,
    original_url: String,
    clicks: i64,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord::new(row.short_id, row.original_url, row.clicks, row.created_at)
    }
}

/// PostgreSQL repository for url records.
///
/// Uniqueness of short ids is enforced by the `urls_short_id_key` constraint
/// and click increments are a single `UPDATE ... RETURNING`, so concurrent
/// requests need no locking in the service.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn is_unique_violation_on_short_id(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORT_ID_CONSTRAINT))
}

fn backend(e: sqlx::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn find_by_original_url(&self, url: &str) -> Result<Option<UrlRecord>, StoreError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT short_id, original_url, clicks, created_at
            FROM urls
            WHERE original_url = $1
            ORDER BY created_at ASC, id ASC
            LIMIT 1
            "#,
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(backend)?;

        Ok(row.map(UrlRecord::from))
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlRecord>, StoreError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT short_id, original_url, clicks, created_at
            FROM urls
            WHERE short_id = $1
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(backend)?;

        Ok(row.map(UrlRecord::from))
    }

    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, StoreError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (short_id, original_url, clicks, created_at)
            VALUES ($1, $2, 0, $3)
            RETURNING short_id, original_url, clicks, created_at
            "#,
        )
        .bind(&new_record.short_id)
        .bind(&new_record.original_url)
        .bind(new_record.created_at)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_short_id(&e) {
                StoreError::DuplicateKey(new_record.short_id.clone())
            } else {
                backend(e)
            }
        })?;

        Ok(row.into())
    }

    async fn increment_clicks(&self, short_id: &str) -> Result<UrlRecord, StoreError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            UPDATE urls
            SET clicks = clicks + 1
            WHERE short_id = $1
            RETURNING short_id, original_url, clicks, created_at
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(backend)?;

        row.map(UrlRecord::from)
            .ok_or_else(|| StoreError::NotFound(short_id.to_string()))
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, StoreError> {
        let rows = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT short_id, original_url, clicks, created_at
            FROM urls
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(backend)?;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(backend)?;

        Ok(())
    }
}
