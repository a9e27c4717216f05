//! Trailing-edge debounce scheduler.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Coalesces a burst of triggers into one delayed action.
///
/// Each `trigger` call cancels any pending invocation for this instance and
/// reschedules the new action `delay` in the future; only the most recent
/// call's context survives a burst. Purely trailing-edge — no leading-edge
/// fire and no max-wait ceiling. One independent timer per instance, so at
/// most one action is pending or in flight at a time.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Creates a scheduler with the given quiet period.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// The quiet period.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancels any pending action and schedules `action` after the quiet
    /// period. An action that has already started running is aborted at
    /// its next await point, not just one still waiting out the delay.
    pub fn trigger<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        }));
    }

    /// Cancels any pending action without scheduling a new one.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    /// Whether an action is currently pending or in flight.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        // A scheduler dropped with the engine must not fire afterwards.
        self.cancel();
    }
}
