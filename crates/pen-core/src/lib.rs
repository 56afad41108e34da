//! Pen Core
//!
//! Central coordination layer for the pen playground shell: wires
//! configuration, storage and the project manager together into the
//! aggregate the rendering layer talks to.

mod config;
mod error;
mod playground;

pub use config::Config;
pub use error::CoreError;
pub use playground::Playground;

// Re-export core components
pub use pen_project::{Project, ProjectError, ProjectManager, ProjectStore, SqliteProjectStore};
pub use pen_shell::{
    NotificationChannel, ProjectPicker, SaveFlow, SavePrompt, SessionOrchestrator, ShellError,
    ShellEvent,
};
pub use pen_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
