//! Delayed completion delivery.
//!
//! Every accepted command that carries a [`CompletionHandle`] becomes one
//! [`TimedTask`]. Tasks are independent: each sleeps for its own delay and
//! invokes its own handle exactly once, and none is ever cancelled. A later
//! `off` does not suppress the completion of an earlier `on`.

use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, error};

use crate::completion::CompletionHandle;

/// A completion waiting for its delay to elapse.
#[derive(Debug)]
pub struct TimedTask {
    /// Command name, used for logs and thread names.
    pub label: &'static str,
    /// Delay measured from the moment the task was scheduled.
    pub delay: Duration,
    /// Sink to invoke once the delay has elapsed.
    pub handle: CompletionHandle,
}

impl TimedTask {
    /// Create a task.
    #[must_use]
    pub fn new(label: &'static str, delay: Duration, handle: CompletionHandle) -> Self {
        Self {
            label,
            delay,
            handle,
        }
    }

    /// Sleep for the delay, then invoke the handle.
    ///
    /// Sink failures and panics are logged and swallowed so they never
    /// reach the command path.
    pub fn run(self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        self.run_now();
    }

    /// Invoke the handle without waiting for the delay.
    ///
    /// Failures are contained the same way as in [`TimedTask::run`].
    pub fn run_now(self) {
        let TimedTask {
            label,
            delay,
            handle,
        } = self;
        debug!(label, delay_ms = delay.as_millis(), "delivering completion");

        match panic::catch_unwind(AssertUnwindSafe(move || handle.complete())) {
            Ok(Ok(())) => {}
            Ok(Err(e)) => error!(label, error = %e, "completion sink failed"),
            Err(_) => error!(label, "completion sink panicked"),
        }
    }
}

/// Failure to start a [`TimedTask`].
///
/// Carries the handle back so the caller can still decide what to do with it.
#[derive(Debug)]
pub struct ScheduleError {
    label: &'static str,
    source: io::Error,
    handle: Option<CompletionHandle>,
}

impl ScheduleError {
    /// Create a scheduling failure.
    #[must_use]
    pub fn new(label: &'static str, source: io::Error, handle: Option<CompletionHandle>) -> Self {
        Self {
            label,
            source,
            handle,
        }
    }

    /// Command the task belonged to.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Split into label, cause and the un-invoked handle.
    #[must_use]
    pub fn into_parts(self) -> (&'static str, io::Error, Option<CompletionHandle>) {
        (self.label, self.source, self.handle)
    }
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to schedule {} completion: {}", self.label, self.source)
    }
}

impl std::error::Error for ScheduleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Runs [`TimedTask`]s after their delay.
pub trait CompletionScheduler: Send + Sync {
    /// Start `task`. Returns as soon as the task is queued; never waits
    /// for the delay.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] when the task cannot be started. The task
    /// has then not run and its handle is inside the error.
    fn schedule(&self, task: TimedTask) -> Result<(), ScheduleError>;
}

impl<S: CompletionScheduler + ?Sized> CompletionScheduler for Arc<S> {
    fn schedule(&self, task: TimedTask) -> Result<(), ScheduleError> {
        (**self).schedule(task)
    }
}

impl<S: CompletionScheduler + ?Sized> CompletionScheduler for Box<S> {
    fn schedule(&self, task: TimedTask) -> Result<(), ScheduleError> {
        (**self).schedule(task)
    }
}

/// Scheduler that gives each task its own detached thread.
#[derive(Debug, Clone, Default)]
pub struct ThreadScheduler {
    _private: (),
}

impl ThreadScheduler {
    /// Create a scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CompletionScheduler for ThreadScheduler {
    fn schedule(&self, task: TimedTask) -> Result<(), ScheduleError> {
        let label = task.label;
        let slot = Arc::new(Mutex::new(Some(task)));
        let worker_slot = Arc::clone(&slot);

        let spawned = thread::Builder::new()
            .name(format!("awhaptic-{label}-completion"))
            .spawn(move || {
                if let Some(task) = worker_slot.lock().take() {
                    task.run();
                }
            });

        match spawned {
            Ok(_) => Ok(()),
            Err(source) => {
                let handle = slot.lock().take().map(|task| task.handle);
                Err(ScheduleError::new(label, source, handle))
            }
        }
    }
}
