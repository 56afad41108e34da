//! Save Flow State Machine
//!
//! ```text
//! Idle
//!   ↓ save intent (session not bound)
//! PromptingForName
//!   ↓ prompt confirm (cancel returns to Idle)
//! Saving
//!   ↓ store resolve
//! Idle
//! ```
//!
//! A session already bound to a project skips the prompt: Idle goes
//! straight to Saving. Only the prompt step is cancelable; a dispatched
//! save runs to resolution.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFlow {
    /// No save in progress
    Idle,
    /// Waiting for the user to confirm a name in the save dialog
    PromptingForName,
    /// A save has been dispatched and has not resolved yet
    Saving,
}

impl SaveFlow {
    /// Check if transition to another state is valid
    pub fn can_transition_to(&self, target: SaveFlow) -> bool {
        match (self, target) {
            // Save intent with no bound project prompts for a name
            (SaveFlow::Idle, SaveFlow::PromptingForName) => true,
            // Save intent with a bound project dispatches immediately
            (SaveFlow::Idle, SaveFlow::Saving) => true,
            // Prompt confirm dispatches the save
            (SaveFlow::PromptingForName, SaveFlow::Saving) => true,
            // Prompt cancel, the only cancelable step
            (SaveFlow::PromptingForName, SaveFlow::Idle) => true,
            // Store resolve, success or failure
            (SaveFlow::Saving, SaveFlow::Idle) => true,
            // Everything else, including re-entering the same state
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SaveFlow::Idle => "idle",
            SaveFlow::PromptingForName => "prompting",
            SaveFlow::Saving => "saving",
        }
    }
}

impl std::fmt::Display for SaveFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
