//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization; request bodies are checked with
//! `validator`. Field names on the wire are camelCase.

pub mod health;
pub mod index;
pub mod shorten;
pub mod url;
