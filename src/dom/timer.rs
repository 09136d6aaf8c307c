//! Single-slot cancellable timeout.

use gloo_timers::callback::Timeout;

/// At most one pending callback. Scheduling replaces — and thereby
/// cancels — any previously scheduled, not-yet-fired callback; dropping
/// the slot cancels outright. This is the browser-side counterpart of
/// [`crate::util::debounce::Debouncer`]'s "last write wins" semantics.
#[derive(Default)]
pub struct TimerSlot {
    pending: Option<Timeout>,
}

impl TimerSlot {
    #[must_use]
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule `callback` after `delay_ms`, superseding any pending one.
    pub fn schedule<F>(&mut self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        // Dropping the previous `Timeout` clears it.
        self.pending = Some(Timeout::new(delay_ms, callback));
    }

    /// Cancel the pending callback, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
