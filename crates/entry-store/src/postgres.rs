use async_trait::async_trait;
use common::{EntryData, EntryId};
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{
    Entry, Result,
    schema::{SchemaStatus, ensure_database, ensure_entries_table},
    store::EntryStore,
};

/// PostgreSQL-backed entry store implementation.
#[derive(Clone)]
pub struct PostgresEntryStore {
    pool: PgPool,
}

impl PostgresEntryStore {
    /// Creates a new PostgreSQL entry store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Ensures the database this store points at exists. See [`ensure_database`].
    pub async fn ensure_database(&self) -> Result<SchemaStatus> {
        ensure_database(&self.pool).await
    }

    /// Ensures the `entries` table exists. See [`ensure_entries_table`].
    pub async fn ensure_schema(&self) -> Result<SchemaStatus> {
        ensure_entries_table(&self.pool).await
    }

    fn row_to_entry(row: PgRow) -> Result<Entry> {
        Ok(Entry {
            id: EntryId::from(row.try_get::<i32, _>("id")?),
            data: row.try_get("data")?,
        })
    }
}

#[async_trait]
impl EntryStore for PostgresEntryStore {
    #[tracing::instrument(skip_all, fields(data = %data))]
    async fn insert(&self, data: EntryData) -> Result<Entry> {
        let row = sqlx::query(
            "INSERT INTO public.entries (data) VALUES ($1) RETURNING id, data",
        )
        .bind(data.to_string())
        .fetch_one(&self.pool)
        .await?;

        let entry = Self::row_to_entry(row)?;
        tracing::debug!(id = %entry.id, "entry inserted");
        metrics::counter!("entry_store_inserts_total").increment(1);

        Ok(entry)
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM public.entries")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
