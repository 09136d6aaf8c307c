//! Two-decimal normalization of currency inputs.

use gloo_events::EventListener;
use web_sys::{Document, HtmlInputElement};

use crate::util::format;

/// Reformat every `.currency-input` to two decimals when it loses focus.
/// Values that do not parse are left as typed for native validation to
/// flag.
pub fn attach(doc: &Document) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    for input in crate::dom::query_all::<HtmlInputElement>(doc, ".currency-input") {
        let source = input.clone();
        listeners.push(EventListener::new(&input, "blur", move |_| {
            if let Some(fixed) = format::currency(&source.value()) {
                source.set_value(&fixed);
            }
        }));
    }
    listeners
}
