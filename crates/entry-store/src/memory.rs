use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use common::{EntryData, EntryId};
use tokio::sync::RwLock;

use crate::{Entry, EntryStoreError, Result, store::EntryStore};

/// In-memory entry store implementation for testing.
///
/// Assigns ids the way a `SERIAL` column does: starting at 1 and
/// increasing by one per insert. Can be switched offline to exercise
/// failure paths.
#[derive(Clone)]
pub struct InMemoryEntryStore {
    entries: Arc<RwLock<Vec<Entry>>>,
    available: Arc<AtomicBool>,
}

impl Default for InMemoryEntryStore {
    fn default() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            available: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl InMemoryEntryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent operation succeed (`true`) or fail with
    /// [`EntryStoreError::Unavailable`] (`false`).
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Returns a snapshot of all stored entries in insertion order.
    pub async fn entries(&self) -> Vec<Entry> {
        self.entries.read().await.clone()
    }

    fn ensure_available(&self) -> Result<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(EntryStoreError::Unavailable(
                "in-memory store is offline".to_string(),
            ))
        }
    }
}

#[async_trait]
impl EntryStore for InMemoryEntryStore {
    async fn insert(&self, data: EntryData) -> Result<Entry> {
        self.ensure_available()?;

        let mut entries = self.entries.write().await;
        let next_id = entries.last().map_or(1, |e| e.id.as_i32() + 1);
        let entry = Entry {
            id: EntryId::new(next_id),
            data: data.to_string(),
        };
        entries.push(entry.clone());

        metrics::counter!("entry_store_inserts_total").increment(1);
        Ok(entry)
    }

    async fn count(&self) -> Result<i64> {
        self.ensure_available()?;
        Ok(self.entries.read().await.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_store_counts_zero() {
        let store = InMemoryEntryStore::new();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = InMemoryEntryStore::new();

        let first = store.insert(EntryData::generate()).await.unwrap();
        let second = store.insert(EntryData::generate()).await.unwrap();

        assert_eq!(first.id, EntryId::new(1));
        assert_eq!(second.id, EntryId::new(2));
    }

    #[tokio::test]
    async fn insert_stores_canonical_text() {
        let store = InMemoryEntryStore::new();
        let data = EntryData::generate();

        let entry = store.insert(data).await.unwrap();

        assert_eq!(entry.data, data.to_string());
        assert_eq!(store.entries().await, vec![entry]);
    }

    #[tokio::test]
    async fn count_tracks_inserts() {
        let store = InMemoryEntryStore::new();
        for expected in 1..=3 {
            store.insert(EntryData::generate()).await.unwrap();
            assert_eq!(store.count().await.unwrap(), expected);
        }
    }

    #[tokio::test]
    async fn offline_store_rejects_operations() {
        let store = InMemoryEntryStore::new();
        store.set_available(false);

        assert!(matches!(
            store.insert(EntryData::generate()).await,
            Err(EntryStoreError::Unavailable(_))
        ));
        assert!(matches!(
            store.count().await,
            Err(EntryStoreError::Unavailable(_))
        ));

        store.set_available(true);
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = InMemoryEntryStore::new();
        let clone = store.clone();

        store.insert(EntryData::generate()).await.unwrap();

        assert_eq!(clone.count().await.unwrap(), 1);
    }
}
