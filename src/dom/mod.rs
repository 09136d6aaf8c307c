//! Browser wiring for every page behavior.
//!
//! DESIGN
//! ======
//! Each module attaches one behavior to the server-rendered tree and is a
//! thin shell over a pure model in [`crate::state`] / [`crate::util`].
//! Element lookups are null-checked; a missing element disables only that
//! behavior. Browser API `Result`s are absorbed at the call site — no
//! failure here may escape to a global handler. Listener handles
//! (`gloo_events::EventListener`) unsubscribe on drop, so dropping a
//! controller is its teardown.

pub mod alerts;
pub mod confirm;
pub mod currency;
pub mod feature_modal;
pub mod file_preview;
pub mod reveal;
pub mod scroll;
pub mod search_filter;
pub mod shortcuts;
pub mod storage;
pub mod submit_guard;
pub mod theme_toggle;
pub mod timer;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

/// All matches for `selector` that cast to `T`, skipping anything else.
pub(crate) fn query_all<T: JsCast>(doc: &Document, selector: &str) -> Vec<T> {
    let mut out = Vec::new();
    let Ok(nodes) = doc.query_selector_all(selector) else {
        return out;
    };
    for index in 0..nodes.length() {
        if let Some(node) = nodes.get(index) {
            if let Ok(element) = node.dyn_into::<T>() {
                out.push(element);
            }
        }
    }
    out
}

/// Nearest ancestor of the event target matching `selector`, for
/// delegated handlers on the document.
pub(crate) fn closest(event: &Event, selector: &str) -> Option<Element> {
    let target = event.target()?;
    let element = target.dyn_ref::<Element>()?;
    match element.closest(selector) {
        Ok(found) => found,
        Err(_) => None,
    }
}
