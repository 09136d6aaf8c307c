use super::*;

const TIMEOUT: u64 = 15_000;
const LABEL: &str = "Save Invoice";

fn guard() -> SubmitGuard {
    SubmitGuard::new(TIMEOUT)
}

// =============================================================
// Invalid path
// =============================================================

#[test]
fn invalid_submit_blocks_and_leaves_control_alone() {
    let mut g = guard();
    assert_eq!(g.on_submit(0, false, LABEL), SubmitOutcome::Block);
    assert_eq!(g.phase(), GuardPhase::Invalid);
    // No processing state was entered, so nothing ever needs restoring.
    assert_eq!(g.poll(TIMEOUT * 2), None);
    assert_eq!(g.phase(), GuardPhase::Invalid);
}

#[test]
fn valid_resubmission_after_invalid_proceeds() {
    let mut g = guard();
    assert_eq!(g.on_submit(0, false, LABEL), SubmitOutcome::Block);
    assert_eq!(g.on_submit(500, true, LABEL), SubmitOutcome::Proceed);
    assert_eq!(g.phase(), GuardPhase::Processing);
}

// =============================================================
// Processing and recovery
// =============================================================

#[test]
fn valid_submit_enters_processing() {
    let mut g = guard();
    assert_eq!(g.on_submit(1_000, true, LABEL), SubmitOutcome::Proceed);
    assert_eq!(g.phase(), GuardPhase::Processing);
}

#[test]
fn recovery_fires_only_after_the_deadline() {
    let mut g = guard();
    g.on_submit(1_000, true, LABEL);
    assert_eq!(g.poll(1_000), None);
    assert_eq!(g.poll(1_000 + TIMEOUT - 1), None);
    assert_eq!(g.poll(1_000 + TIMEOUT), Some(LABEL.to_owned()));
    assert_eq!(g.phase(), GuardPhase::Idle);
}

#[test]
fn recovery_restores_exactly_once() {
    let mut g = guard();
    g.on_submit(0, true, LABEL);
    assert_eq!(g.poll(TIMEOUT), Some(LABEL.to_owned()));
    assert_eq!(g.poll(TIMEOUT + 1), None);
    assert_eq!(g.poll(TIMEOUT * 10), None);
}

#[test]
fn restored_content_equals_pre_submission_content() {
    let mut g = guard();
    let original = "<i class=\"bi bi-save\"></i> Save";
    g.on_submit(42, true, original);
    assert_eq!(g.poll(42 + TIMEOUT), Some(original.to_owned()));
}

#[test]
fn resubmission_supersedes_the_pending_deadline() {
    let mut g = guard();
    g.on_submit(0, true, "first");
    // A second attempt before the first deadline replaces the saved
    // content and restarts the clock.
    g.on_submit(5_000, true, "second");
    assert_eq!(g.poll(TIMEOUT), None);
    assert_eq!(g.poll(5_000 + TIMEOUT), Some("second".to_owned()));
}

#[test]
fn timeout_is_configurable_per_guard() {
    let mut g = SubmitGuard::new(10_000);
    g.on_submit(0, true, LABEL);
    assert_eq!(g.poll(9_999), None);
    assert_eq!(g.poll(10_000), Some(LABEL.to_owned()));
}

#[test]
fn idle_guard_never_restores() {
    let mut g = guard();
    assert_eq!(g.poll(u64::MAX), None);
    assert_eq!(g.phase(), GuardPhase::Idle);
}
