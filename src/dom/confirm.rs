//! Confirmation gate for destructive actions.

use gloo_events::EventListener;
use web_sys::{Document, Element};

const PROMPT: &str = "Are you sure you want to delete this item? This action cannot be undone.";

/// Require a confirm dialog before any `.btn-delete` click goes through.
pub fn attach(doc: &Document) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    for button in crate::dom::query_all::<Element>(doc, ".btn-delete") {
        listeners.push(EventListener::new(&button, "click", |event| {
            let confirmed = match web_sys::window().map(|w| w.confirm_with_message(PROMPT)) {
                Some(Ok(choice)) => choice,
                _ => false,
            };
            if !confirmed {
                event.prevent_default();
            }
        }));
    }
    listeners
}
