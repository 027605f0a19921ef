use chrono::{DateTime, Utc};
use shared::{
    domain::{MessageId, Role},
    protocol::ChatMessage,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyState {
    Idle,
    AwaitingReply,
}

pub fn greeting_for(user_name: &str) -> String {
    format!(
        "Hi {user_name}! I'm your productivity co-pilot. I can analyze metrics across Jira and GitHub to explain bottlenecks or suggest improvements. What would you like to know about the current sprint?"
    )
}

/// Append-only chat history. Always holds at least the seeded greeting.
#[derive(Debug, Clone)]
pub struct ConversationLog {
    messages: Vec<ChatMessage>,
    state: ReplyState,
    next_id: u64,
    draft: Option<String>,
}

impl ConversationLog {
    pub fn new(greeting: impl Into<String>) -> Self {
        let mut log = Self {
            messages: Vec::new(),
            state: ReplyState::Idle,
            next_id: 1,
            draft: None,
        };
        log.push(Role::Assistant, greeting.into(), Utc::now());
        log
    }

    pub fn append(&mut self, role: Role, content: impl Into<String>) -> ChatMessage {
        self.append_at(role, content, Utc::now())
    }

    /// Like [`append`](Self::append) with an explicit clock reading. A reading
    /// earlier than the last message is clamped so timestamps never go backwards.
    pub fn append_at(
        &mut self,
        role: Role,
        content: impl Into<String>,
        now: DateTime<Utc>,
    ) -> ChatMessage {
        let message = self.push(role, content.into(), now);
        self.state = match role {
            Role::User => ReplyState::AwaitingReply,
            Role::Assistant => ReplyState::Idle,
        };
        message
    }

    fn push(&mut self, role: Role, content: String, now: DateTime<Utc>) -> ChatMessage {
        let created_at = match self.messages.last() {
            Some(last) if last.created_at > now => last.created_at,
            _ => now,
        };
        let message = ChatMessage {
            message_id: MessageId(self.next_id),
            role,
            content,
            created_at,
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }

    pub fn is_responding(&self) -> bool {
        self.state == ReplyState::AwaitingReply
    }

    pub fn state(&self) -> ReplyState {
        self.state
    }

    /// Drops the pending-reply marker without appending anything.
    pub(crate) fn abandon_reply(&mut self) {
        self.state = ReplyState::Idle;
    }

    /// Text waiting in the input box. Blank text clears it.
    pub fn set_draft(&mut self, text: &str) {
        self.draft = if text.trim().is_empty() {
            None
        } else {
            Some(text.to_string())
        };
    }

    pub fn draft(&self) -> Option<&str> {
        self.draft.as_deref()
    }

    pub(crate) fn clear_draft(&mut self) {
        self.draft = None;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

#[cfg(test)]
#[path = "tests/conversation_tests.rs"]
mod tests;
