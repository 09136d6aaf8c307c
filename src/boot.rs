//! WASM entry point wiring every behavior to the page.

use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

use crate::dom;

/// Runs when the module is instantiated (the script tag is deferred, so
/// the tree is already parsed): install diagnostics, then attach each
/// behavior independently.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    attach_all(&doc);
}

/// Attach every behavior to `doc`. A missing element disables only its
/// own feature; nothing here blocks the others. The returned handles are
/// leaked on purpose — the behaviors live as long as the page. (Each
/// handle also detaches on drop, which is the teardown path for tests and
/// embedders that keep them instead.)
pub fn attach_all(doc: &Document) {
    std::mem::forget(dom::theme_toggle::ThemeController::attach(doc));

    if let Some(filter) = dom::search_filter::SearchFilter::attach(doc) {
        std::mem::forget(filter);
    } else {
        log::debug!("search: no #search-input, filter disabled");
    }

    std::mem::forget(dom::submit_guard::SubmitGuardSet::attach(doc));

    dom::alerts::attach(doc);
    for listener in dom::confirm::attach(doc) {
        listener.forget();
    }
    for listener in dom::file_preview::attach(doc) {
        listener.forget();
    }
    for listener in dom::currency::attach(doc) {
        listener.forget();
    }
    dom::shortcuts::attach(doc).forget();
    dom::scroll::attach(doc).forget();
    dom::reveal::attach(doc);

    if let Some(listener) = dom::feature_modal::attach(doc) {
        listener.forget();
    } else {
        log::debug!("features: no #featureModal, placeholder modal disabled");
    }
}
