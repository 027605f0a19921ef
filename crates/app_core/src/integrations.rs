use std::{collections::BTreeMap, time::Duration};

use shared::{domain::IntegrationId, error::CoreError, protocol::IntegrationStatus};
use tracing::{debug, info};

use crate::{
    coordinator::Completion,
    scheduler::{TaskHandle, TaskQueue},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionPhase {
    Disconnected,
    Connecting,
    Connected,
    Disconnecting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationEntry {
    pub id: IntegrationId,
    pub connected: bool,
    verification: Option<TaskHandle>,
}

impl IntegrationEntry {
    fn new(id: IntegrationId) -> Self {
        Self {
            id,
            connected: false,
            verification: None,
        }
    }

    pub fn pending(&self) -> bool {
        self.verification.is_some()
    }

    pub fn phase(&self) -> ConnectionPhase {
        match (self.connected, self.pending()) {
            (false, false) => ConnectionPhase::Disconnected,
            (false, true) => ConnectionPhase::Connecting,
            (true, false) => ConnectionPhase::Connected,
            (true, true) => ConnectionPhase::Disconnecting,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IntegrationRegistry {
    entries: BTreeMap<IntegrationId, IntegrationEntry>,
    verification_delay: Duration,
}

impl IntegrationRegistry {
    pub fn new(verification_delay: Duration) -> Self {
        let entries = IntegrationId::ALL
            .into_iter()
            .map(|id| (id, IntegrationEntry::new(id)))
            .collect();
        Self {
            entries,
            verification_delay,
        }
    }

    /// Starts a simulated verification for `raw_id`. The connected flag flips
    /// when the scheduled [`Completion::Verification`] is delivered back through
    /// [`complete_toggle`](Self::complete_toggle).
    pub fn toggle(
        &mut self,
        raw_id: &str,
        queue: &mut TaskQueue<Completion>,
    ) -> Result<TaskHandle, CoreError> {
        let id: IntegrationId = raw_id.parse()?;
        let delay = self.verification_delay;
        let entry = self.entry_mut(id);
        if entry.pending() {
            debug!(integration = %id, "toggle rejected: verification in flight");
            return Err(CoreError::ToggleInProgress(id));
        }

        let handle = queue.schedule(delay, Completion::Verification(id));
        entry.verification = Some(handle);
        info!(
            integration = %id,
            target_connected = !entry.connected,
            "integration verification started"
        );
        Ok(handle)
    }

    /// Applies a due verification. Returns the new connected flag, or `None`
    /// if nothing was pending for `id`.
    pub fn complete_toggle(&mut self, id: IntegrationId) -> Option<bool> {
        let entry = self.entry_mut(id);
        entry.verification.take()?;
        entry.connected = !entry.connected;
        info!(integration = %id, connected = entry.connected, "integration verification finished");
        Some(entry.connected)
    }

    /// Aborts an in-flight verification, leaving `connected` untouched.
    pub fn cancel_toggle(
        &mut self,
        raw_id: &str,
        queue: &mut TaskQueue<Completion>,
    ) -> Result<Option<bool>, CoreError> {
        let id: IntegrationId = raw_id.parse()?;
        let entry = self.entry_mut(id);
        let Some(handle) = entry.verification.take() else {
            return Ok(None);
        };
        queue.cancel(handle);
        info!(integration = %id, connected = entry.connected, "integration verification cancelled");
        Ok(Some(entry.connected))
    }

    pub fn status(&self) -> IntegrationStatus {
        self.entries
            .iter()
            .map(|(id, entry)| (*id, entry.connected))
            .collect()
    }

    pub fn entry(&self, id: IntegrationId) -> &IntegrationEntry {
        &self.entries[&id]
    }

    pub fn entries(&self) -> impl Iterator<Item = &IntegrationEntry> {
        self.entries.values()
    }

    pub fn is_pending(&self, id: IntegrationId) -> bool {
        self.entry(id).pending()
    }

    fn entry_mut(&mut self, id: IntegrationId) -> &mut IntegrationEntry {
        self.entries
            .entry(id)
            .or_insert_with(|| IntegrationEntry::new(id))
    }
}

#[cfg(test)]
#[path = "tests/integrations_tests.rs"]
mod tests;
