//! Shell surface contracts
//!
//! Dialogs are external collaborators: the orchestrator only opens and
//! closes them and reacts to the confirmations they feed back.

/// Save dialog: collects or confirms a project name before the first
/// save of a session. Confirmation reaches the orchestrator as a
/// `confirm_save` call carrying the chosen name.
pub trait SavePrompt: Send + Sync {
    fn open(&self, suggested_name: &str);
    fn close(&self);
}

/// Project selection dialog. Selecting an entry loads the project and
/// applies it to the editor outside this crate.
pub trait ProjectPicker: Send + Sync {
    fn open(&self);
}
