//! Business logic services for the application layer.

pub mod listing_service;
pub mod redirect_service;
pub mod shorten_service;
pub mod stats_service;

pub use listing_service::ListingService;
pub use redirect_service::RedirectService;
pub use shorten_service::{MAX_ID_ATTEMPTS, ShortenOutcome, ShortenService};
pub use stats_service::StatsService;
