//! Runs timer effects on the tokio runtime

use std::collections::HashMap;
use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, trace};

use crate::app::AppMessage;
use crate::inbox::{Effect, TaskId, Timer};

/// Spawns one sleeping task per scheduled timer and posts
/// [`AppMessage::TimerFired`] when it elapses
pub struct Scheduler {
    message_tx: mpsc::Sender<AppMessage>,
    tasks: HashMap<TaskId, JoinHandle<()>>,
}

impl Scheduler {
    pub fn new(message_tx: mpsc::Sender<AppMessage>) -> Self {
        Self {
            message_tx,
            tasks: HashMap::new(),
        }
    }

    pub fn apply(&mut self, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            match effect {
                Effect::Schedule { id, delay, timer } => self.schedule(id, delay, timer),
                Effect::Cancel(id) => self.cancel(id),
            }
        }
    }

    fn schedule(&mut self, id: TaskId, delay: Duration, timer: Timer) {
        trace!(task = %id, ?delay, ?timer, "scheduling timer");
        let tx = self.message_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppMessage::TimerFired { id, timer }).await;
        });
        if let Some(previous) = self.tasks.insert(id, handle) {
            previous.abort();
        }
    }

    fn cancel(&mut self, id: TaskId) {
        if let Some(handle) = self.tasks.remove(&id) {
            debug!(task = %id, "cancelling timer");
            handle.abort();
        }
    }

    /// Forget a timer whose message was received; false if it was cancelled meanwhile
    pub fn complete(&mut self, id: TaskId) -> bool {
        self.tasks.remove(&id).is_some()
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Abort everything, e.g. on shutdown
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
