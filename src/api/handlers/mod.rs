//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod health;
pub mod index;
pub mod listing;
pub mod redirect;
pub mod shorten;
pub mod stats;

pub use health::health_handler;
pub use index::{fallback_handler, index_handler};
pub use listing::list_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
