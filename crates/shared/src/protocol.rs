use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{IntegrationId, MessageId, Role, Section};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub message_id: MessageId,
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Connected flag per integration, as reported by `status()`.
pub type IntegrationStatus = BTreeMap<IntegrationId, bool>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum UserAction {
    StartSession,
    EndSession,
    SelectSection { section: Section },
    SendChat { text: String },
    /// Puts text in the chat input without sending it.
    DraftChat { text: String },
    SendDraft,
    CancelReply,
    ToggleIntegration { id: String },
    CancelToggle { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Notification {
    SessionChanged {
        active: bool,
    },
    SectionSelected {
        section: Section,
    },
    MessageAppended {
        message: ChatMessage,
    },
    ReplyPending,
    DraftUpdated {
        text: Option<String>,
    },
    IntegrationPending {
        id: IntegrationId,
        target_connected: bool,
    },
    IntegrationUpdated {
        id: IntegrationId,
        connected: bool,
    },
    IntegrationCancelled {
        id: IntegrationId,
        connected: bool,
    },
}
