//! Global keyboard shortcuts.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent};

/// `Escape` closes an open modal, `Ctrl/Cmd + /` focuses the search
/// input, `Ctrl/Cmd + D` toggles the theme. Each target is looked up at
/// keypress time; absence makes the shortcut a no-op.
pub fn attach(doc: &Document) -> EventListener {
    let target = doc.clone();
    EventListener::new(doc, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        match key.key().as_str() {
            "Escape" => close_open_modal(&target),
            "/" if key.ctrl_key() || key.meta_key() => {
                key.prevent_default();
                if let Some(input) = element_by_id(&target, "search-input") {
                    let _ = input.focus();
                }
            }
            "d" if key.ctrl_key() || key.meta_key() => {
                key.prevent_default();
                if let Some(toggle) = element_by_id(&target, "themeToggle") {
                    toggle.click();
                }
            }
            _ => {}
        }
    })
}

fn element_by_id(doc: &Document, id: &str) -> Option<HtmlElement> {
    doc.get_element_by_id(id)?.dyn_into().ok()
}

fn close_open_modal(doc: &Document) {
    let open = match doc.query_selector(".modal.show") {
        Ok(Some(element)) => element,
        _ => return,
    };
    crate::dom::feature_modal::hide_modal(&open);
}
