//! Completion handles that record when they fire.

use std::sync::Arc;
use std::time::{Duration, Instant};

use awhaptic_vibrator::{CompletionError, CompletionHandle};
use parking_lot::{Condvar, Mutex};

#[derive(Debug, Default)]
struct ProbeState {
    fired: Vec<Instant>,
}

/// Records every invocation of the handles it hands out.
///
/// ```rust
/// use std::time::Duration;
/// use awhaptic_test_helpers::CompletionProbe;
///
/// let probe = CompletionProbe::new();
/// probe.handle().complete().unwrap();
/// assert!(probe.wait_for(1, Duration::from_millis(10)));
/// assert_eq!(probe.count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompletionProbe {
    inner: Arc<(Mutex<ProbeState>, Condvar)>,
}

impl CompletionProbe {
    /// Create a probe that has recorded nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle that records into this probe.
    #[must_use]
    pub fn handle(&self) -> CompletionHandle {
        let inner = Arc::clone(&self.inner);
        CompletionHandle::from_fn(move || {
            let (state, fired) = &*inner;
            state.lock().fired.push(Instant::now());
            fired.notify_all();
        })
    }

    /// A handle that records into this probe and then reports a failure.
    #[must_use]
    pub fn failing_handle(&self) -> CompletionHandle {
        let inner = Arc::clone(&self.inner);
        CompletionHandle::new(move || {
            let (state, fired) = &*inner;
            state.lock().fired.push(Instant::now());
            fired.notify_all();
            Err(CompletionError::failed("probe failure"))
        })
    }

    /// Number of invocations so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.inner.0.lock().fired.len()
    }

    /// Time from `start` to the first invocation.
    #[must_use]
    pub fn first_after(&self, start: Instant) -> Option<Duration> {
        self.inner
            .0
            .lock()
            .fired
            .first()
            .map(|at| at.saturating_duration_since(start))
    }

    /// Block until at least `n` invocations were recorded or `timeout`
    /// elapses. Returns whether `n` was reached.
    #[must_use]
    pub fn wait_for(&self, n: usize, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let (state, fired) = &*self.inner;
        let mut guard = state.lock();
        while guard.fired.len() < n {
            if fired.wait_until(&mut guard, deadline).timed_out() {
                return guard.fired.len() >= n;
            }
        }
        true
    }
}
