//! Core domain entities.
//!
//! The service has a single entity, [`UrlRecord`], with a separate
//! [`NewUrlRecord`] used when inserting.

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
