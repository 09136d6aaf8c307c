//! Debounced incremental filtering of `.searchable-item` elements.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::consts::SEARCH_DEBOUNCE_MS;
use crate::dom::timer::TimerSlot;
use crate::state::search;

/// Handle over the live search behavior. Dropping it detaches the input
/// listener and cancels any pending filter run.
pub struct SearchFilter {
    _input: EventListener,
    _slot: Rc<RefCell<TimerSlot>>,
}

impl SearchFilter {
    /// Wire `#search-input`. Returns `None` when the input is absent, in
    /// which case the whole feature stays off.
    pub fn attach(doc: &Document) -> Option<Self> {
        let input: HtmlInputElement = doc.get_element_by_id("search-input")?.dyn_into().ok()?;
        let slot = Rc::new(RefCell::new(TimerSlot::new()));

        let listener = {
            let slot = Rc::clone(&slot);
            let doc = doc.clone();
            let source = input.clone();
            EventListener::new(&input, "input", move |_| {
                let query = search::normalize(&source.value());
                let doc = doc.clone();
                // Each keystroke supersedes the pending filter run.
                slot.borrow_mut().schedule(SEARCH_DEBOUNCE_MS, move || {
                    apply_filter(&doc, &query);
                });
            })
        };

        Some(Self {
            _input: listener,
            _slot: slot,
        })
    }
}

/// Show items whose text contains `query`, hide the rest. Visibility
/// toggling only — no reordering, no removal from the tree.
fn apply_filter(doc: &Document, query: &str) {
    for item in crate::dom::query_all::<HtmlElement>(doc, ".searchable-item") {
        let text = item.text_content().unwrap_or_default();
        if search::matches(&text, query) {
            let _ = item.style().remove_property("display");
        } else {
            let _ = item.style().set_property("display", "none");
        }
    }
}
