//! Completion schedulers for tests.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use awhaptic_vibrator::{CompletionScheduler, ScheduleError, TimedTask};
use parking_lot::Mutex;

/// Scheduler whose every `schedule` call fails, as if no thread could be
/// spawned.
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectingScheduler;

impl CompletionScheduler for RejectingScheduler {
    fn schedule(&self, task: TimedTask) -> Result<(), ScheduleError> {
        Err(ScheduleError::new(
            task.label,
            io::Error::new(io::ErrorKind::WouldBlock, "scheduler rejected task"),
            Some(task.handle),
        ))
    }
}

/// Scheduler that queues tasks until the test runs them.
///
/// Clones share one queue, so a clone kept by the test sees what the
/// vibrator scheduled.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    queue: Arc<Mutex<Vec<TimedTask>>>,
}

impl ManualScheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued tasks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }

    /// `(label, delay)` of each queued task, in scheduling order.
    #[must_use]
    pub fn scheduled(&self) -> Vec<(&'static str, Duration)> {
        self.queue
            .lock()
            .iter()
            .map(|task| (task.label, task.delay))
            .collect()
    }

    /// Invoke every queued handle now, ignoring delays. Returns how many ran.
    pub fn fire_all(&self) -> usize {
        let tasks: Vec<TimedTask> = self.queue.lock().drain(..).collect();
        let count = tasks.len();
        for task in tasks {
            task.run_now();
        }
        count
    }
}

impl CompletionScheduler for ManualScheduler {
    fn schedule(&self, task: TimedTask) -> Result<(), ScheduleError> {
        self.queue.lock().push(task);
        Ok(())
    }
}
