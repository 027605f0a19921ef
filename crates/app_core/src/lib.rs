pub mod classifier;
pub mod conversation;
pub mod coordinator;
pub mod dashboard;
pub mod integrations;
pub mod scheduler;

pub use classifier::{classify, Suggestion, SUGGESTIONS};
pub use conversation::{greeting_for, ConversationLog, ReplyState};
pub use coordinator::{Completion, CoordinatorOptions, View, ViewCoordinator};
pub use dashboard::{DashboardSnapshot, Insight, SNAPSHOT};
pub use integrations::{ConnectionPhase, IntegrationEntry, IntegrationRegistry};
pub use scheduler::{TaskHandle, TaskQueue};
