//! Cooperative deferred-completion queue driven by a virtual clock.
//!
//! Nothing here runs on its own: callers move time forward with
//! [`TaskQueue::advance`] and receive the payloads that came due, oldest
//! deadline first and, for equal deadlines, in the order they were scheduled.

use std::{collections::BTreeMap, time::Duration};

use shared::domain::TaskId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle {
    id: TaskId,
    due: Duration,
}

impl TaskHandle {
    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn due(&self) -> Duration {
        self.due
    }
}

#[derive(Debug)]
pub struct TaskQueue<T> {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<(Duration, TaskId), T>,
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 1,
            pending: BTreeMap::new(),
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration, payload: T) -> TaskHandle {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let due = self.now.saturating_add(delay);
        self.pending.insert((due, id), payload);
        TaskHandle { id, due }
    }

    /// Removes a task before it fires. Returns the payload if it was still queued.
    pub fn cancel(&mut self, handle: TaskHandle) -> Option<T> {
        self.pending.remove(&(handle.due, handle.id))
    }

    pub fn advance(&mut self, elapsed: Duration) -> Vec<T> {
        self.now = self.now.saturating_add(elapsed);
        let mut due = Vec::new();
        while let Some(entry) = self.pending.first_entry() {
            if entry.key().0 > self.now {
                break;
            }
            due.push(entry.remove());
        }
        due
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(due, _)| *due)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/scheduler_tests.rs"]
mod tests;
