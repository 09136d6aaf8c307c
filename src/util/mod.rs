//! Browser-free helpers shared across behaviors.

pub mod debounce;
pub mod format;
