//! Controller output events and error modeling for the console.

use shared::{
    error::{CoreError, ErrorCode},
    protocol::{IntegrationStatus, Notification},
};

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Core(Notification),
    Redraw,
    Status(IntegrationStatus),
    Help,
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    /// Bad input the user can fix by retyping.
    Validation,
    /// Valid request that the current state refuses.
    Busy,
    Session,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Command,
    Session,
    Chat,
    Integrations,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    code: Option<ErrorCode>,
    message: String,
}

impl UiError {
    pub fn from_core(context: UiErrorContext, err: &CoreError) -> Self {
        let category = match err.code() {
            ErrorCode::EmptyInput | ErrorCode::InvalidIntegration => UiErrorCategory::Validation,
            ErrorCode::ToggleInProgress | ErrorCode::ResponsePending => UiErrorCategory::Busy,
            ErrorCode::SessionInactive => UiErrorCategory::Session,
        };
        Self {
            category,
            context,
            code: Some(err.code()),
            message: err.to_string(),
        }
    }

    /// Unparseable console input; carries no core error code.
    pub fn bad_command(message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Validation,
            context: UiErrorContext::Command,
            code: None,
            message: message.into(),
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match (self.category, self.context) {
            (UiErrorCategory::Session, _) => Some("type `start` to sign in first"),
            (UiErrorCategory::Busy, UiErrorContext::Chat) => {
                Some("wait for the co-pilot or `cancel reply`")
            }
            (UiErrorCategory::Busy, _) => Some("wait for verification or `cancel <id>`"),
            (UiErrorCategory::Validation, UiErrorContext::Integrations) => {
                Some("known tools: jira, github, monday")
            }
            (UiErrorCategory::Validation, UiErrorContext::Command) => Some("try `help`"),
            _ => None,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
