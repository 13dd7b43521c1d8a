//! Record store implementations.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryUrlRepository`] - in-process storage for tests and local runs
//!
//! [`connect`] picks one from the configured connection string.

pub mod memory_url_repository;
pub mod pg_url_repository;

pub use memory_url_repository::MemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::config::{Config, StoreKind};
use crate::domain::repositories::UrlRepository;

/// Builds the record store described by the configuration.
///
/// For PostgreSQL the pool is created with the configured limits, the initial
/// connection is retried with exponential backoff (`DB_CONNECT_RETRIES`
/// attempts after the first), and pending migrations are applied.
///
/// # Errors
///
/// Returns an error if the database stays unreachable or a migration fails.
pub async fn connect(config: &Config) -> Result<Arc<dyn UrlRepository>> {
    match config.store_kind() {
        StoreKind::Memory => {
            tracing::warn!("Using in-memory store; records are lost on restart");
            Ok(Arc::new(MemoryUrlRepository::new()))
        }
        StoreKind::Postgres => {
            let options = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime));

            let strategy = ExponentialBackoff::from_millis(2)
                .factor(50)
                .max_delay(Duration::from_secs(5))
                .map(jitter)
                .take(config.db_connect_retries);

            let pool = Retry::spawn(strategy, || {
                let options = options.clone();
                async move {
                    options
                        .connect(&config.database_url)
                        .await
                        .inspect_err(|e| tracing::warn!("Database connection failed: {}", e))
                }
            })
            .await
            .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Migrations applied");

            Ok(Arc::new(PgUrlRepository::new(Arc::new(pool))))
        }
    }
}
