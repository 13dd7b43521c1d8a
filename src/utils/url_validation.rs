//! Absolute URL validation.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),
}

/// Checks that `input` parses as an absolute URL with a scheme.
///
/// The input is not rewritten: the stored URL is exactly what the client
/// submitted, so dedup and redirects see the same bytes.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for an empty string and
/// [`UrlValidationError::InvalidFormat`] for anything `url` cannot parse
/// without a base (relative paths, bare words, missing scheme). Whitespace-only
/// input is not empty and falls into the latter.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com/path?q=1").is_ok());
/// assert!(validate_url("not a url").is_err());
/// assert!(validate_url("/relative/path").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<Url, UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))
}
