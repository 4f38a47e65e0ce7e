//! Deferred work requested by the inbox views

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one scheduled timer for its whole lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub fn next() -> Self {
        Self(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "task-{}", self.0)
    }
}

/// What should happen when a timer fires
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timer {
    /// Simulated customer reply after the agent sends a message
    CounterReply,
    /// Simulated assist lookup for a query
    AssistLookup { query: String },
    /// Simulated assist hint after a suggestion was sent
    AssistFollowUp,
}

/// Side effects the runtime must carry out after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Schedule {
        id: TaskId,
        delay: Duration,
        timer: Timer,
    },
    Cancel(TaskId),
}

impl Effect {
    pub fn schedule(delay: Duration, timer: Timer) -> (TaskId, Self) {
        let id = TaskId::next();
        (id, Self::Schedule { id, delay, timer })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_ids_are_unique() {
        let a = TaskId::next();
        let b = TaskId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn test_schedule_returns_matching_id() {
        let (id, effect) = Effect::schedule(Duration::from_millis(10), Timer::CounterReply);
        assert!(matches!(effect, Effect::Schedule { id: inner, .. } if inner == id));
    }
}
