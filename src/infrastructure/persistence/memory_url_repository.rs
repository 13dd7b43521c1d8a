//! In-process implementation of the url repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{StoreError, UrlRepository};

/// A stored record plus its insertion sequence number.
///
/// The sequence breaks ties between records created within the same
/// timestamp so listing order stays stable.
#[derive(Debug, Clone)]
struct Stored {
    record: UrlRecord,
    seq: u64,
}

/// Url repository backed by `DashMap`.
///
/// Used for tests and for running the service without a database
/// (`DATABASE_URL=memory://`). Contents are lost on restart.
///
/// Short-id uniqueness relies on the map's entry API, and click increments
/// happen under the shard's write lock, so both are atomic.
#[derive(Debug, Default)]
pub struct MemoryUrlRepository {
    records: DashMap<String, Stored>,
    // original_url -> short_id of the first record created for it
    by_original_url: DashMap<String, String>,
    next_seq: AtomicU64,
}

impl MemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn find_by_original_url(&self, url: &str) -> Result<Option<UrlRecord>, StoreError> {
        let Some(short_id) = self.by_original_url.get(url).map(|id| id.value().clone()) else {
            return Ok(None);
        };

        Ok(self
            .records
            .get(&short_id)
            .map(|stored| stored.record.clone()))
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlRecord>, StoreError> {
        Ok(self
            .records
            .get(short_id)
            .map(|stored| stored.record.clone()))
    }

    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, StoreError> {
        let record = match self.records.entry(new_record.short_id.clone()) {
            Entry::Occupied(_) => return Err(StoreError::DuplicateKey(new_record.short_id)),
            Entry::Vacant(slot) => {
                let record = new_record.into_record();
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                slot.insert(Stored {
                    record: record.clone(),
                    seq,
                });
                record
            }
        };

        self.by_original_url
            .entry(record.original_url.clone())
            .or_insert_with(|| record.short_id.clone());

        Ok(record)
    }

    async fn increment_clicks(&self, short_id: &str) -> Result<UrlRecord, StoreError> {
        let mut stored = self
            .records
            .get_mut(short_id)
            .ok_or_else(|| StoreError::NotFound(short_id.to_string()))?;

        stored.record.clicks += 1;
        Ok(stored.record.clone())
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, StoreError> {
        let mut all: Vec<Stored> = self.records.iter().map(|r| r.value().clone()).collect();

        all.sort_by(|a, b| {
            b.record
                .created_at
                .cmp(&a.record.created_at)
                .then(b.seq.cmp(&a.seq))
        });

        Ok(all.into_iter().map(|stored| stored.record).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn new_record(short_id: &str, url: &str) -> NewUrlRecord {
        NewUrlRecord::now(short_id.to_string(), url.to_string())
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = MemoryUrlRepository::new();

        let created = repo
            .insert(new_record("abc12345", "https://example.com"))
            .await
            .unwrap();
        assert_eq!(created.clicks, 0);

        let by_id = repo.find_by_short_id("abc12345").await.unwrap().unwrap();
        assert_eq!(by_id, created);

        let by_url = repo
            .find_by_original_url("https://example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_url.short_id, "abc12345");
    }

    #[tokio::test]
    async fn test_insert_duplicate_short_id() {
        let repo = MemoryUrlRepository::new();
        repo.insert(new_record("dup00000", "https://a.com"))
            .await
            .unwrap();

        let result = repo.insert(new_record("dup00000", "https://b.com")).await;

        assert_eq!(result, Err(StoreError::DuplicateKey("dup00000".into())));
        assert_eq!(repo.len(), 1);
        assert!(repo.find_by_original_url("https://b.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_original_url_keeps_first_record() {
        let repo = MemoryUrlRepository::new();
        repo.insert(new_record("first000", "https://same.com"))
            .await
            .unwrap();
        repo.insert(new_record("second00", "https://same.com"))
            .await
            .unwrap();

        let found = repo
            .find_by_original_url("https://same.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.short_id, "first000");
    }

    #[tokio::test]
    async fn test_increment_clicks() {
        let repo = MemoryUrlRepository::new();
        repo.insert(new_record("click000", "https://example.com"))
            .await
            .unwrap();

        let first = repo.increment_clicks("click000").await.unwrap();
        let second = repo.increment_clicks("click000").await.unwrap();

        assert_eq!(first.clicks, 1);
        assert_eq!(second.clicks, 2);
    }

    #[tokio::test]
    async fn test_increment_clicks_not_found() {
        let repo = MemoryUrlRepository::new();

        let result = repo.increment_clicks("zzzzzzzz").await;

        assert_eq!(result, Err(StoreError::NotFound("zzzzzzzz".into())));
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let repo = MemoryUrlRepository::new();
        let base = Utc::now();

        for (i, id) in ["aaaaaaaa", "bbbbbbbb", "cccccccc"].iter().enumerate() {
            let mut record = new_record(id, &format!("https://{id}.com"));
            record.created_at = base + Duration::seconds(i as i64);
            repo.insert(record).await.unwrap();
        }

        let ids: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.short_id)
            .collect();

        assert_eq!(ids, vec!["cccccccc", "bbbbbbbb", "aaaaaaaa"]);
    }

    #[tokio::test]
    async fn test_list_all_same_timestamp_uses_insertion_order() {
        let repo = MemoryUrlRepository::new();
        let at = Utc::now();

        for id in ["first000", "second00", "third000"] {
            let mut record = new_record(id, &format!("https://{id}.com"));
            record.created_at = at;
            repo.insert(record).await.unwrap();
        }

        let ids: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.short_id)
            .collect();

        assert_eq!(ids, vec!["third000", "second00", "first000"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increments_are_not_lost() {
        let repo = std::sync::Arc::new(MemoryUrlRepository::new());
        repo.insert(new_record("hot00000", "https://hot.com"))
            .await
            .unwrap();

        let tasks: Vec<_> = (0..100)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.increment_clicks("hot00000").await })
            })
            .collect();

        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let record = repo.find_by_short_id("hot00000").await.unwrap().unwrap();
        assert_eq!(record.clicks, 100);
    }
}
