use async_trait::async_trait;
use common::EntryData;

use crate::{Entry, Result};

/// Core trait for entry store implementations.
///
/// Implementations must be thread-safe (Send + Sync); handlers share one
/// store handle across all requests.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Persists a new entry holding `data` and returns it with its
    /// storage-assigned id.
    async fn insert(&self, data: EntryData) -> Result<Entry>;

    /// Returns the total number of stored entries.
    async fn count(&self) -> Result<i64>;
}
