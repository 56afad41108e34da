//! Pen Shell
//!
//! Behavioral core of the playground header: decides for each user
//! intent whether a prompt is needed, drives the project manager, and
//! routes save outcomes into a transient notification surface.
//! Outward signals (rename, share) are typed events on a broadcast
//! channel rather than bubbled through a component tree.

mod error;
mod event;
mod notify;
mod orchestrator;
mod save_flow;
mod surface;

pub use error::ShellError;
pub use event::ShellEvent;
pub use notify::NotificationChannel;
pub use orchestrator::SessionOrchestrator;
pub use save_flow::SaveFlow;
pub use surface::{ProjectPicker, SavePrompt};

pub type Result<T> = std::result::Result<T, ShellError>;
