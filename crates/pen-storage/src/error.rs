//! Storage error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Backing storage cannot accept the operation (quota exhausted,
    /// storage disabled by policy, read-only volume).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
