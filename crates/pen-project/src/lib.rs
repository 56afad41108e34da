//! Pen Project Management
//!
//! Owns the notion of the "current project": the named, persisted
//! (name, source) pair the active editing session is bound to.
//! - At most one current project per manager; starts unset
//! - A successful save or load binds the session; a new pen clears it
//! - The store is source of truth; a binding can go stale if the project
//!   is deleted behind the manager's back

mod error;
mod manager;
mod project;
mod store;

pub use error::ProjectError;
pub use manager::ProjectManager;
pub use project::Project;
pub use store::{ProjectStore, SqliteProjectStore};

pub type Result<T> = std::result::Result<T, ProjectError>;
