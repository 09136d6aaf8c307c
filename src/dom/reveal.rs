//! Scroll-triggered reveal of dashboard cards.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::consts::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

/// Observe every `.dashboard-card` and add `animate-in` as it enters the
/// viewport; the stylesheet owns the actual transition. The observer and
/// its callback live for the page.
pub fn attach(doc: &Document) {
    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let _ = entry.target().class_list().add_1("animate-in");
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    for card in crate::dom::query_all::<Element>(doc, ".dashboard-card") {
        observer.observe(&card);
    }
    callback.forget();
}
