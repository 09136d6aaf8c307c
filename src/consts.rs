//! Shared timing constants and DOM contract strings.

/// Quiet period before the search filter runs after the last keystroke.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// How long a submit button may stay in the processing state before the
/// guard assumes the submission failed silently and restores it.
pub const SUBMIT_RECOVERY_MS: u32 = 15_000;

/// Delay before dismissible alerts close on their own.
pub const ALERT_DISMISS_MS: u32 = 5_000;

/// `localStorage` key holding the explicit theme choice.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on the document element that the stylesheet keys off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Visibility ratio at which a dashboard card counts as revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Root margin shrinking the reveal viewport so cards animate slightly
/// before their natural scroll position.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
