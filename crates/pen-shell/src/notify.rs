//! Single-slot transient notification surface

use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Default)]
struct Slot {
    text: String,
    visible: bool,
}

/// A "toast": presents one transient text message at a time. A new
/// `show` supersedes the previous message whether or not it was
/// dismissed. Success vs. error is conveyed by phrasing alone.
pub struct NotificationChannel {
    slot: Arc<RwLock<Slot>>,
}

impl NotificationChannel {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(RwLock::new(Slot::default())),
        }
    }

    /// Replace any displayed message and mark the channel visible.
    pub fn show(&self, text: impl Into<String>) {
        let mut slot = self.slot.write();
        slot.text = text.into();
        slot.visible = true;
    }

    /// Hide the channel. The message is not shown again without a
    /// subsequent `show`.
    pub fn dismiss(&self) {
        self.slot.write().visible = false;
    }

    /// The visible message, if any.
    pub fn current(&self) -> Option<String> {
        let slot = self.slot.read();
        slot.visible.then(|| slot.text.clone())
    }

    pub fn is_visible(&self) -> bool {
        self.slot.read().visible
    }
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for NotificationChannel {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}
