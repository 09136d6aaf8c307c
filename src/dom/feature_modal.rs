//! "Not yet available" modal for future features.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::state::features;

/// Delegated click handler on the document: clicks on `[data-feature]`
/// links whose key is in the catalog open `#featureModal` instead of
/// navigating; links for live pages pass through untouched. Returns
/// `None` when the modal markup is absent.
pub fn attach(doc: &Document) -> Option<EventListener> {
    doc.get_element_by_id("featureModal")?;
    let target = doc.clone();
    Some(EventListener::new(doc, "click", move |event| {
        let Some(link) = crate::dom::closest(event, "[data-feature]") else {
            return;
        };
        let Some(key) = link.get_attribute("data-feature") else {
            return;
        };
        let Some(feature) = features::lookup(&key) else {
            return;
        };
        event.prevent_default();
        fill(&target, "featureName", feature.name);
        fill(&target, "featureDescription", feature.description);
        fill(&target, "featurePhase", feature.phase);
        if let Some(modal) = target.get_element_by_id("featureModal") {
            show_modal(&modal);
        }
    }))
}

fn fill(doc: &Document, id: &str, text: &str) {
    if let Some(element) = doc.get_element_by_id(id) {
        element.set_text_content(Some(text));
    }
}

/// Minimal modal open; the stylesheet keys off `.show` and `aria-hidden`.
pub(crate) fn show_modal(modal: &Element) {
    let _ = modal.class_list().add_1("show");
    let _ = modal.set_attribute("aria-hidden", "false");
    if let Some(element) = modal.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property("display", "block");
    }
}

pub(crate) fn hide_modal(modal: &Element) {
    let _ = modal.class_list().remove_1("show");
    let _ = modal.set_attribute("aria-hidden", "true");
    if let Some(element) = modal.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property("display", "none");
    }
}
