//! Theme persistence over `localStorage`.
//!
//! Storage can be disabled or full; every access degrades to "no stored
//! preference" instead of throwing, so the theme falls back to
//! session-only behavior.

use web_sys::Storage;

use crate::consts::THEME_STORAGE_KEY;
use crate::state::theme::Theme;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().unwrap_or(None)
}

/// The stored explicit theme choice, if any and if storage is reachable.
pub fn read_theme() -> Option<Theme> {
    let storage = local_storage()?;
    match storage.get_item(THEME_STORAGE_KEY) {
        Ok(Some(raw)) => Theme::parse(&raw),
        _ => None,
    }
}

/// Persist an explicit choice. A write failure is absorbed; the session
/// keeps its in-memory preference.
pub fn write_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}
