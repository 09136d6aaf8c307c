#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

/// Where a guarded form currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardPhase {
    /// Normal display, submit control enabled.
    Idle,
    /// Last submit attempt failed native validation; still on the page.
    Invalid,
    /// A valid submission is in flight; submit control shows the
    /// processing state.
    Processing,
}

/// What the host should do with a submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Cancel the native submission and surface the validation UI.
    Block,
    /// Let the native submission proceed and show the processing state.
    Proceed,
}

#[derive(Clone, Debug)]
struct Saved {
    content: String,
    deadline_ms: u64,
}

/// Submission guard for one form.
///
/// Valid submissions hand control to the browser; the page navigating away
/// is the only success signal there is. The guard's job is the failure
/// side: if the recovery deadline passes while we are still on the page,
/// the submission died silently and the saved control content must be
/// restored so the user can retry. Driven by a caller-supplied clock in
/// milliseconds.
#[derive(Clone, Debug)]
pub struct SubmitGuard {
    timeout_ms: u64,
    phase: GuardPhase,
    saved: Option<Saved>,
}

impl SubmitGuard {
    /// `timeout_ms` bounds how long the control may stay in the processing
    /// state without a navigation.
    #[must_use]
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            phase: GuardPhase::Idle,
            saved: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> GuardPhase {
        self.phase
    }

    /// A submit attempt at `now_ms` with the native validity verdict and
    /// the submit control's current content.
    pub fn on_submit(&mut self, now_ms: u64, valid: bool, control_content: &str) -> SubmitOutcome {
        if !valid {
            self.phase = GuardPhase::Invalid;
            self.saved = None;
            return SubmitOutcome::Block;
        }
        self.phase = GuardPhase::Processing;
        self.saved = Some(Saved {
            content: control_content.to_owned(),
            deadline_ms: now_ms + self.timeout_ms,
        });
        SubmitOutcome::Proceed
    }

    /// Check the recovery deadline. Returns the content to restore exactly
    /// once when the deadline has passed while still processing; the guard
    /// then returns to idle.
    pub fn poll(&mut self, now_ms: u64) -> Option<String> {
        if self.phase != GuardPhase::Processing {
            return None;
        }
        let due = self.saved.as_ref().is_some_and(|s| now_ms >= s.deadline_ms);
        if !due {
            return None;
        }
        self.phase = GuardPhase::Idle;
        self.saved.take().map(|s| s.content)
    }
}
