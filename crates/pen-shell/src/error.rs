//! Shell error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    /// Empty or otherwise unacceptable name at prompt-confirm time.
    /// Rejected before any save is dispatched; the prompt stays open.
    #[error("Project name cannot be empty")]
    InvalidName,
}
