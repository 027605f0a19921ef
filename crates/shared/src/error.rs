use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::IntegrationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    EmptyInput,
    InvalidIntegration,
    ToggleInProgress,
    ResponsePending,
    SessionInactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("message text is empty")]
    EmptyInput,
    #[error("unknown integration '{0}'")]
    InvalidIntegration(String),
    #[error("{0} verification already in progress")]
    ToggleInProgress(IntegrationId),
    #[error("assistant reply is still pending")]
    ResponsePending,
    #[error("no active session")]
    SessionInactive,
}

impl CoreError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::EmptyInput => ErrorCode::EmptyInput,
            CoreError::InvalidIntegration(_) => ErrorCode::InvalidIntegration,
            CoreError::ToggleInProgress(_) => ErrorCode::ToggleInProgress,
            CoreError::ResponsePending => ErrorCode::ResponsePending,
            CoreError::SessionInactive => ErrorCode::SessionInactive,
        }
    }
}
