//! Caller-supplied completion sinks.
//!
//! A [`CompletionHandle`] wraps a one-shot callback. [`CompletionHandle::complete`]
//! consumes the handle, so a sink can be invoked at most once no matter
//! which path (scheduled task or error return) ends up owning it.

use core::fmt;

use parking_lot::Mutex;
use thiserror::Error;

/// Failure reported by a completion sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    /// The receiving side of the notification has gone away.
    #[error("Completion receiver disconnected")]
    Disconnected,

    /// The sink rejected the notification.
    #[error("Completion sink failed: {0}")]
    Failed(String),
}

impl CompletionError {
    /// Create a sink failure.
    #[must_use]
    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }
}

type CompletionFn = Box<dyn FnOnce() -> Result<(), CompletionError> + Send + 'static>;

/// One-shot completion notification owned by a single command.
///
/// The mutex only makes the handle `Sync`; it is never locked.
pub struct CompletionHandle {
    callback: Mutex<CompletionFn>,
}

impl CompletionHandle {
    /// Wrap a fallible callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: FnOnce() -> Result<(), CompletionError> + Send + 'static,
    {
        Self {
            callback: Mutex::new(Box::new(callback)),
        }
    }

    /// Wrap a callback that cannot fail.
    pub fn from_fn<F>(callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::new(move || {
            callback();
            Ok(())
        })
    }

    /// Handle that sends `()` on `sender` when completed.
    #[must_use]
    pub fn from_sender(sender: std::sync::mpsc::Sender<()>) -> Self {
        Self::new(move || sender.send(()).or(Err(CompletionError::Disconnected)))
    }

    /// Invoke the sink, consuming the handle.
    ///
    /// # Errors
    ///
    /// Returns whatever the sink reports.
    pub fn complete(self) -> Result<(), CompletionError> {
        (self.callback.into_inner())()
    }
}

impl fmt::Debug for CompletionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionHandle").finish_non_exhaustive()
    }
}
