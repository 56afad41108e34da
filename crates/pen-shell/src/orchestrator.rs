//! Session orchestrator
//!
//! Mediates between user intents (rename, save, load, new pen, share)
//! and the project manager. Decides whether a save needs a name prompt,
//! serializes saves through the save-flow state machine, and turns
//! every save outcome into exactly one toast message.

use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::broadcast;

use pen_project::ProjectManager;

use crate::error::ShellError;
use crate::event::ShellEvent;
use crate::notify::NotificationChannel;
use crate::save_flow::SaveFlow;
use crate::surface::{ProjectPicker, SavePrompt};
use crate::Result;

const EVENT_CHANNEL_CAPACITY: usize = 64;

pub struct SessionOrchestrator {
    manager: ProjectManager,
    toast: NotificationChannel,
    prompt: Arc<dyn SavePrompt>,
    picker: Arc<dyn ProjectPicker>,
    save_flow: Arc<Mutex<SaveFlow>>,
    events: broadcast::Sender<ShellEvent>,
}

impl SessionOrchestrator {
    pub fn new(
        manager: ProjectManager,
        prompt: Arc<dyn SavePrompt>,
        picker: Arc<dyn ProjectPicker>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            manager,
            toast: NotificationChannel::new(),
            prompt,
            picker,
            save_flow: Arc::new(Mutex::new(SaveFlow::Idle)),
            events,
        }
    }

    /// Subscribe to outward shell events (rename, share).
    pub fn subscribe(&self) -> broadcast::Receiver<ShellEvent> {
        self.events.subscribe()
    }

    pub fn manager(&self) -> &ProjectManager {
        &self.manager
    }

    pub fn notifications(&self) -> &NotificationChannel {
        &self.toast
    }

    pub fn save_state(&self) -> SaveFlow {
        *self.save_flow.lock()
    }

    /// Save intent. A session not yet bound to a project is asked to
    /// confirm a name first; a bound session overwrites under the
    /// displayed name without confirmation.
    pub async fn request_save(&self, name: &str, source: &str) {
        if self.manager.current_project().is_none() {
            // First save of the session: never write under an unconfirmed name
            if self.transition(SaveFlow::PromptingForName) {
                self.prompt.open(name);
            }
        } else if self.transition(SaveFlow::Saving) {
            self.run_save(name, source).await;
        }
    }

    /// Prompt confirmation carrying the chosen name. The dialog closes
    /// before the save resolves; the outcome arrives as a toast.
    pub async fn confirm_save(&self, name: &str, source: &str) -> Result<()> {
        if name.trim().is_empty() {
            // Rejected before dispatch; the prompt stays open
            return Err(ShellError::InvalidName);
        }

        if !self.transition(SaveFlow::Saving) {
            return Ok(());
        }

        self.prompt.close();
        self.run_save(name, source).await;

        Ok(())
    }

    /// Dismiss the save dialog without saving. Only the prompt step is
    /// cancelable; a dispatched save runs to resolution.
    pub fn cancel_prompt(&self) {
        {
            let mut flow = self.save_flow.lock();
            if *flow != SaveFlow::PromptingForName {
                tracing::debug!(state = %*flow, "Ignored prompt cancel");
                return;
            }
            *flow = SaveFlow::Idle;
        }

        self.prompt.close();
    }

    /// Load intent: open the project picker. Loading the selection and
    /// applying it to the editor happens behind that surface.
    pub fn request_load(&self) {
        self.picker.open();
    }

    /// New-pen intent: unbind the session. The editor's in-memory
    /// source stays the caller's responsibility.
    pub fn new_project(&self) {
        self.manager.clear_current_project();
    }

    /// Propagate an edited display name upward.
    pub fn edit_name(&self, name: &str) {
        let _ = self.events.send(ShellEvent::NameEdited(name.to_string()));
    }

    /// Share intent; carries no payload.
    pub fn request_share(&self) {
        let _ = self.events.send(ShellEvent::ShareRequested);
    }

    fn transition(&self, target: SaveFlow) -> bool {
        let mut flow = self.save_flow.lock();
        if !flow.can_transition_to(target) {
            tracing::debug!(from = %*flow, to = %target, "Ignored save-flow transition");
            return false;
        }

        *flow = target;
        true
    }

    /// Runs with the flow already in `Saving`; resolves back to `Idle`
    /// with the outcome attached to the notification channel.
    async fn run_save(&self, name: &str, source: &str) {
        match self.manager.save_project(name, source).await {
            Ok(project) => {
                self.toast.show("Project saved");
                let _ = self.events.send(ShellEvent::NameEdited(project.name));
            }
            Err(e) => {
                tracing::warn!(error = %e, project_name = %name, "Save failed");
                self.toast.show(format!("Error: {e}"));
            }
        }

        *self.save_flow.lock() = SaveFlow::Idle;
    }
}

impl Clone for SessionOrchestrator {
    fn clone(&self) -> Self {
        Self {
            manager: self.manager.clone(),
            toast: self.toast.clone(),
            prompt: Arc::clone(&self.prompt),
            picker: Arc::clone(&self.picker),
            save_flow: Arc::clone(&self.save_flow),
            events: self.events.clone(),
        }
    }
}
