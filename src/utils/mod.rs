//! Utility functions for identifier generation and request handling.
//!
//! - [`id_generator`] - Short identifier generation
//! - [`request_origin`] - Scheme and host of the incoming request
//! - [`url_validation`] - Absolute URL validation

pub mod id_generator;
pub mod request_origin;
pub mod url_validation;
