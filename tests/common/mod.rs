#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use url_shortener::domain::entities::NewUrlRecord;
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::infrastructure::persistence::MemoryUrlRepository;
use url_shortener::routes::router;
use url_shortener::state::AppState;

pub const TEST_HOST: &str = "sho.rt";

pub fn create_test_state() -> (AppState, Arc<MemoryUrlRepository>) {
    let repository = Arc::new(MemoryUrlRepository::new());
    let state = AppState::new(repository.clone());
    (state, repository)
}

/// Full router over a fresh in-memory store.
pub fn create_test_server() -> (TestServer, Arc<MemoryUrlRepository>) {
    let (state, repository) = create_test_state();
    let server = TestServer::new(router(state)).unwrap();
    (server, repository)
}

pub async fn create_test_url(repo: &MemoryUrlRepository, short_id: &str, url: &str) {
    repo.insert(NewUrlRecord::now(short_id.to_string(), url.to_string()))
        .await
        .unwrap();
}

pub async fn create_test_url_at(
    repo: &MemoryUrlRepository,
    short_id: &str,
    url: &str,
    created_at: DateTime<Utc>,
) {
    repo.insert(NewUrlRecord {
        short_id: short_id.to_string(),
        original_url: url.to_string(),
        created_at,
    })
    .await
    .unwrap();
}
