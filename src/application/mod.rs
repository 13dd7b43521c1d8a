//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::UrlRepository`] trait
//! and provide a small API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::ShortenService`] - Short link creation with dedup
//! - [`services::RedirectService`] - Resolution and click counting
//! - [`services::StatsService`] - Per-link metadata
//! - [`services::ListingService`] - All links, newest first

pub mod services;
