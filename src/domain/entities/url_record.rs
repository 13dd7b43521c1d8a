//! Url record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its click counter.
///
/// `short_id` and `created_at` are fixed at creation. `clicks` only grows,
/// and only through [`crate::domain::repositories::UrlRepository::increment_clicks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub short_id: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        short_id: String,
        original_url: String,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            short_id,
            original_url,
            clicks,
            created_at,
        }
    }
}

/// Input data for inserting a new record.
///
/// Records always start with zero clicks.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub short_id: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl NewUrlRecord {
    /// Stamps a new record with the current time.
    pub fn now(short_id: String, original_url: String) -> Self {
        Self {
            short_id,
            original_url,
            created_at: Utc::now(),
        }
    }

    /// Materializes the record as it looks right after insertion.
    pub fn into_record(self) -> UrlRecord {
        UrlRecord::new(self.short_id, self.original_url, 0, self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_record_creation() {
        let now = Utc::now();
        let record = UrlRecord::new(
            "abc123XY".to_string(),
            "https://example.com".to_string(),
            3,
            now,
        );

        assert_eq!(record.short_id, "abc123XY");
        assert_eq!(record.original_url, "https://example.com");
        assert_eq!(record.clicks, 3);
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn test_new_record_starts_with_zero_clicks() {
        let new_record = NewUrlRecord::now(
            "xyz789ab".to_string(),
            "https://rust-lang.org".to_string(),
        );
        let created_at = new_record.created_at;

        let record = new_record.into_record();

        assert_eq!(record.short_id, "xyz789ab");
        assert_eq!(record.original_url, "https://rust-lang.org");
        assert_eq!(record.clicks, 0);
        assert_eq!(record.created_at, created_at);
    }
}
