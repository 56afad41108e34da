//! Project error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Project not found: {0}")]
    NotFound(String),

    #[error("Project name cannot be empty")]
    EmptyName,

    #[error("Storage error: {0}")]
    Storage(#[from] pen_storage::StorageError),
}
