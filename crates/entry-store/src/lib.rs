//! Entry persistence for the entry service.
//!
//! Exposes the [`EntryStore`] trait with a PostgreSQL implementation and an
//! in-memory one for tests, plus the check-and-create bootstrap for the
//! `entries` table.

pub mod entry;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod schema;
pub mod store;

pub use common::{EntryData, EntryId};
pub use entry::Entry;
pub use error::{EntryStoreError, Result};
pub use memory::InMemoryEntryStore;
pub use postgres::PostgresEntryStore;
pub use schema::{
    ENTRIES_TABLE, MAINTENANCE_DATABASE, SchemaStatus, ensure_database, ensure_entries_table,
};
pub use store::EntryStore;
