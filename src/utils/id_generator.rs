//! Short identifier generation.
//!
//! Identifiers are URL-safe base64 (no padding) over random bytes from the
//! thread-local CSPRNG, so every character is one of `A-Z a-z 0-9 - _`.

use base64::Engine as _;
use rand::Rng;

/// Number of random bytes per identifier. Six bytes encode to exactly
/// [`SHORT_ID_LENGTH`] base64 characters with no padding.
const SHORT_ID_BYTES: usize = 6;

/// Length of every generated short identifier.
pub const SHORT_ID_LENGTH: usize = 8;

/// Generates a random short identifier.
///
/// Uniqueness is not guaranteed; callers handle the rare collision.
///
/// # Examples
///
/// ```ignore
/// let id = generate_short_id();
/// assert_eq!(id.len(), 8);
/// assert!(is_url_safe(&id));
/// ```
pub fn generate_short_id() -> String {
    let mut buffer = [0u8; SHORT_ID_BYTES];
    rand::rng().fill(&mut buffer);

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Returns true if every character belongs to the URL-safe alphabet.
pub fn is_url_safe(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_short_id_has_correct_length() {
        for _ in 0..100 {
            assert_eq!(generate_short_id().len(), SHORT_ID_LENGTH);
        }
    }

    #[test]
    fn test_generate_short_id_url_safe_characters() {
        for _ in 0..1000 {
            let id = generate_short_id();
            assert!(is_url_safe(&id), "unexpected character in {id}");
        }
    }

    #[test]
    fn test_generate_short_id_no_padding() {
        let id = generate_short_id();
        assert!(!id.contains('='));
    }

    #[test]
    fn test_generate_short_id_produces_unique_ids() {
        const SAMPLE: usize = 100_000;
        let ids: HashSet<String> = (0..SAMPLE).map(|_| generate_short_id()).collect();

        assert_eq!(ids.len(), SAMPLE);
    }

    #[test]
    fn test_is_url_safe() {
        assert!(is_url_safe("aZ09-_xy"));
        assert!(!is_url_safe("abc/def+"));
        assert!(!is_url_safe("has space"));
        assert!(!is_url_safe(""));
    }
}
