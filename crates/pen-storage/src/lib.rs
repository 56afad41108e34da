//! Pen Storage Layer
//!
//! SQLite-based persistence for playground state.
//! Holds the project table the editor saves into and the settings
//! key-value table the shell reads preferences from.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
