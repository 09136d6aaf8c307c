#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

#[derive(Clone, Debug)]
struct Pending {
    deadline_ms: u64,
    value: String,
}

/// Single-slot trailing debouncer over a caller-supplied clock.
///
/// Each input supersedes the pending one, so at most one fire is ever
/// scheduled and a burst of inputs collapses into a single fire — carrying
/// the latest value — once the quiet period elapses. The browser shell
/// mirrors this with a real timer; tests drive it by advancing `now_ms`.
#[derive(Clone, Debug)]
pub struct Debouncer {
    quiet_ms: u64,
    pending: Option<Pending>,
}

impl Debouncer {
    #[must_use]
    pub fn new(quiet_ms: u64) -> Self {
        Self {
            quiet_ms,
            pending: None,
        }
    }

    /// Record an input event, cancelling any pending fire and restarting
    /// the quiet period from `now_ms`.
    pub fn input(&mut self, now_ms: u64, value: &str) {
        self.pending = Some(Pending {
            deadline_ms: now_ms + self.quiet_ms,
            value: value.to_owned(),
        });
    }

    /// Whether a fire is currently scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Fire if the quiet period has elapsed; at most once per input burst.
    pub fn poll(&mut self, now_ms: u64) -> Option<String> {
        let due = self.pending.as_ref().is_some_and(|p| now_ms >= p.deadline_ms);
        if !due {
            return None;
        }
        self.pending.take().map(|p| p.value)
    }
}
