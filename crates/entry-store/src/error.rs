use thiserror::Error;

/// Errors that can occur when interacting with the entry store.
#[derive(Debug, Error)]
pub enum EntryStoreError {
    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The backing store cannot serve requests right now.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for entry store operations.
pub type Result<T> = std::result::Result<T, EntryStoreError>;
