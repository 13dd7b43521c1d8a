//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{ListingService, RedirectService, ShortenService, StatsService};
use crate::domain::repositories::UrlRepository;

/// Services wired to one record store.
///
/// The store is built at startup and passed in, so tests can substitute the
/// in-memory repository or a mock.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<dyn UrlRepository>>,
    pub redirect_service: Arc<RedirectService<dyn UrlRepository>>,
    pub stats_service: Arc<StatsService<dyn UrlRepository>>,
    pub listing_service: Arc<ListingService<dyn UrlRepository>>,
    pub repository: Arc<dyn UrlRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self {
            shorten_service: Arc::new(ShortenService::new(repository.clone())),
            redirect_service: Arc::new(RedirectService::new(repository.clone())),
            stats_service: Arc::new(StatsService::new(repository.clone())),
            listing_service: Arc::new(ListingService::new(repository.clone())),
            repository,
        }
    }
}
