//! Selection preview for file upload inputs.

use gloo_events::EventListener;
use web_sys::{Document, Element, HtmlInputElement};

use crate::util::format;

/// On every file input change, write `Selected: <name> (<size>)` into the
/// sibling `.file-preview` element and un-hide it. Inputs without a
/// preview element are skipped.
pub fn attach(doc: &Document) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    for input in crate::dom::query_all::<HtmlInputElement>(doc, "input[type=\"file\"]") {
        let source = input.clone();
        listeners.push(EventListener::new(&input, "change", move |_| {
            let Some(file) = source.files().and_then(|list| list.get(0)) else {
                return;
            };
            let Some(preview) = preview_element(&source) else {
                return;
            };
            let summary = format!(
                "Selected: {} ({})",
                file.name(),
                format::file_size(file.size())
            );
            preview.set_text_content(Some(&summary));
            let _ = preview.class_list().remove_1("d-none");
        }));
    }
    listeners
}

fn preview_element(input: &HtmlInputElement) -> Option<Element> {
    match input.parent_element()?.query_selector(".file-preview") {
        Ok(found) => found,
        Err(_) => None,
    }
}
