//! Top-level view state: session flag, current section, and the deferred work
//! that drives chat replies and integration verification.

use std::time::Duration;

use shared::{
    domain::{IntegrationId, Role, Section},
    error::CoreError,
    protocol::{IntegrationStatus, Notification, UserAction},
};
use tracing::{debug, info};

use crate::{
    classifier,
    conversation::{greeting_for, ConversationLog},
    dashboard::{DashboardSnapshot, SNAPSHOT},
    integrations::IntegrationRegistry,
    scheduler::{TaskHandle, TaskQueue},
};

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_VERIFICATION_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone)]
pub struct CoordinatorOptions {
    pub user_name: String,
    pub reply_delay: Duration,
    pub verification_delay: Duration,
}

impl Default for CoordinatorOptions {
    fn default() -> Self {
        Self {
            user_name: "Jane".into(),
            reply_delay: DEFAULT_REPLY_DELAY,
            verification_delay: DEFAULT_VERIFICATION_DELAY,
        }
    }
}

/// Work scheduled on the coordinator's queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    AssistantReply { query: String },
    Verification(IntegrationId),
}

/// What is on screen right now.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    Landing,
    Dashboard(&'a DashboardSnapshot),
    Integrations(&'a IntegrationRegistry),
    Chat(&'a ConversationLog),
}

#[derive(Debug)]
pub struct ViewCoordinator {
    active: bool,
    section: Section,
    integrations: IntegrationRegistry,
    conversation: ConversationLog,
    queue: TaskQueue<Completion>,
    reply_task: Option<TaskHandle>,
    reply_delay: Duration,
    outbox: Vec<Notification>,
}

impl Default for ViewCoordinator {
    fn default() -> Self {
        Self::new(CoordinatorOptions::default())
    }
}

impl ViewCoordinator {
    pub fn new(options: CoordinatorOptions) -> Self {
        Self {
            active: false,
            section: Section::default(),
            integrations: IntegrationRegistry::new(options.verification_delay),
            conversation: ConversationLog::new(greeting_for(&options.user_name)),
            queue: TaskQueue::new(),
            reply_task: None,
            reply_delay: options.reply_delay,
            outbox: Vec::new(),
        }
    }

    pub fn apply(&mut self, action: UserAction) -> Result<(), CoreError> {
        match action {
            UserAction::StartSession => self.set_session(true),
            UserAction::EndSession => self.set_session(false),
            UserAction::SelectSection { section } => self.select_section(section),
            UserAction::SendChat { text } => self.send_chat(&text)?,
            UserAction::DraftChat { text } => self.draft_chat(&text)?,
            UserAction::SendDraft => self.send_draft()?,
            UserAction::CancelReply => {
                self.cancel_reply();
            }
            UserAction::ToggleIntegration { id } => {
                self.toggle_integration(&id)?;
            }
            UserAction::CancelToggle { id } => {
                self.cancel_toggle(&id)?;
            }
        }
        Ok(())
    }

    /// Signing out returns the next session to the default section. Pending
    /// replies and verifications still complete.
    pub fn set_session(&mut self, active: bool) {
        if !active {
            self.section = Section::default();
        }
        if self.active != active {
            info!(active, "session changed");
        }
        self.active = active;
        self.outbox.push(Notification::SessionChanged { active });
    }

    pub fn select_section(&mut self, section: Section) {
        if !self.active {
            debug!(%section, "section selected while signed out");
        }
        self.section = section;
        self.outbox.push(Notification::SectionSelected { section });
    }

    pub fn send_chat(&mut self, text: &str) -> Result<(), CoreError> {
        if text.trim().is_empty() {
            return Err(CoreError::EmptyInput);
        }
        self.require_session()?;
        if self.conversation.is_responding() {
            return Err(CoreError::ResponsePending);
        }

        self.conversation.clear_draft();
        let message = self.conversation.append(Role::User, text);
        self.outbox.push(Notification::MessageAppended { message });
        let handle = self.queue.schedule(
            self.reply_delay,
            Completion::AssistantReply {
                query: text.to_string(),
            },
        );
        self.reply_task = Some(handle);
        self.outbox.push(Notification::ReplyPending);
        debug!(due_ms = handle.due().as_millis() as u64, "assistant reply scheduled");
        Ok(())
    }

    /// Fills the chat input, as picking a suggestion prompt does. Nothing is
    /// sent until [`send_draft`](Self::send_draft).
    pub fn draft_chat(&mut self, text: &str) -> Result<(), CoreError> {
        self.require_session()?;
        self.conversation.set_draft(text);
        self.outbox.push(Notification::DraftUpdated {
            text: self.conversation.draft().map(str::to_string),
        });
        Ok(())
    }

    /// Sends the current draft. The draft survives a rejected send.
    pub fn send_draft(&mut self) -> Result<(), CoreError> {
        let text = self.conversation.draft().unwrap_or_default().to_string();
        self.send_chat(&text)
    }

    /// Abandons a pending assistant reply. Returns false if none was pending.
    pub fn cancel_reply(&mut self) -> bool {
        let Some(handle) = self.reply_task.take() else {
            return false;
        };
        self.queue.cancel(handle);
        self.conversation.abandon_reply();
        info!("assistant reply cancelled");
        true
    }

    pub fn toggle_integration(&mut self, raw_id: &str) -> Result<TaskHandle, CoreError> {
        self.require_session()?;
        let id: IntegrationId = raw_id.parse()?;
        let handle = self.integrations.toggle(id.as_str(), &mut self.queue)?;
        let target_connected = !self.integrations.entry(id).connected;
        self.outbox.push(Notification::IntegrationPending {
            id,
            target_connected,
        });
        Ok(handle)
    }

    pub fn cancel_toggle(&mut self, raw_id: &str) -> Result<bool, CoreError> {
        let id: IntegrationId = raw_id.parse()?;
        match self.integrations.cancel_toggle(raw_id, &mut self.queue)? {
            Some(connected) => {
                self.outbox
                    .push(Notification::IntegrationCancelled { id, connected });
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Moves virtual time forward and runs whatever came due, in schedule order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Notification> {
        for completion in self.queue.advance(elapsed) {
            self.complete(completion);
        }
        self.take_notifications()
    }

    fn complete(&mut self, completion: Completion) {
        match completion {
            Completion::AssistantReply { query } => {
                self.reply_task = None;
                let reply = classifier::classify(&query);
                let message = self.conversation.append(Role::Assistant, reply);
                debug!(message_id = message.message_id.0, "assistant reply delivered");
                self.outbox.push(Notification::MessageAppended { message });
            }
            Completion::Verification(id) => {
                if let Some(connected) = self.integrations.complete_toggle(id) {
                    self.outbox
                        .push(Notification::IntegrationUpdated { id, connected });
                }
            }
        }
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.outbox)
    }

    pub fn view(&self) -> View<'_> {
        if !self.active {
            return View::Landing;
        }
        match self.section {
            Section::Dashboard => View::Dashboard(&SNAPSHOT),
            Section::Integrations => View::Integrations(&self.integrations),
            Section::Chat => View::Chat(&self.conversation),
        }
    }

    pub fn header_title(&self) -> &'static str {
        self.section.header_title()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn integrations(&self) -> &IntegrationRegistry {
        &self.integrations
    }

    pub fn integration_status(&self) -> IntegrationStatus {
        self.integrations.status()
    }

    pub fn conversation(&self) -> &ConversationLog {
        &self.conversation
    }

    pub fn now(&self) -> Duration {
        self.queue.now()
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.queue.next_due()
    }

    pub fn pending_tasks(&self) -> usize {
        self.queue.len()
    }

    fn require_session(&self) -> Result<(), CoreError> {
        if self.active {
            Ok(())
        } else {
            Err(CoreError::SessionInactive)
        }
    }
}

#[cfg(test)]
#[path = "tests/coordinator_tests.rs"]
mod tests;
