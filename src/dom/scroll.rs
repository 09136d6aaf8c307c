//! Smooth scrolling for same-page anchor links.

use gloo_events::EventListener;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Delegated click handler: anchors pointing at an element on this page
/// smooth-scroll to it instead of jumping. Anchors whose target does not
/// exist navigate normally.
pub fn attach(doc: &Document) -> EventListener {
    let target = doc.clone();
    EventListener::new(doc, "click", move |event| {
        let Some(link) = crate::dom::closest(event, "a[href^=\"#\"]") else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let id = href.trim_start_matches('#');
        if id.is_empty() {
            return;
        }
        let Some(destination) = target.get_element_by_id(id) else {
            return;
        };
        event.prevent_default();
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        destination.scroll_into_view_with_scroll_into_view_options(&options);
    })
}
