//! Outward shell events
//!
//! Typed replacement for cross-component DOM signaling: ancestors
//! subscribe to a broadcast channel instead of listening for bubbled
//! events.

/// Events emitted by the shell for ancestor consumption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// The displayed project name was edited, or confirmed by a
    /// successful save
    NameEdited(String),
    /// The user asked to share the pen; no payload
    ShareRequested,
}
