//! Theme resolution, application, and toggle wiring.
//!
//! Resolution priority is stored choice > OS preference > light. The
//! OS-derived initial theme is applied but not persisted, so later OS
//! changes keep flowing through until the user toggles explicitly.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, MediaQueryList};

use crate::consts::THEME_ATTRIBUTE;
use crate::dom::storage;
use crate::state::theme::{Theme, ThemeModel};

/// Handle over the live theme behavior. Dropping it detaches the toggle
/// click and media-query listeners.
pub struct ThemeController {
    doc: Document,
    model: Rc<RefCell<ThemeModel>>,
    _toggle: Option<EventListener>,
    _media: Option<EventListener>,
}

impl ThemeController {
    /// Resolve and apply the initial theme, then wire `#themeToggle` and
    /// the OS preference signal. Both are optional; absence only loses
    /// that input.
    pub fn attach(doc: &Document) -> Self {
        let stored = storage::read_theme();
        let prefers_dark = media_query().is_some_and(|mq| mq.matches());
        let model = Rc::new(RefCell::new(ThemeModel::resolve(stored, prefers_dark)));

        apply(doc, model.borrow().applied());

        let toggle = doc.get_element_by_id("themeToggle").map(|el| {
            let model = Rc::clone(&model);
            let doc = doc.clone();
            EventListener::new(&el, "click", move |_| {
                let next = model.borrow_mut().toggle();
                storage::write_theme(next);
                apply(&doc, next);
            })
        });
        if toggle.is_none() {
            log::debug!("theme: no #themeToggle, manual toggle disabled");
        }

        let media = media_query().map(|mq| {
            let model = Rc::clone(&model);
            let doc = doc.clone();
            EventListener::new(&mq, "change", move |event| {
                let prefers_dark = event
                    .dyn_ref::<web_sys::MediaQueryListEvent>()
                    .is_some_and(|e| e.matches());
                // Ignored once an explicit choice exists.
                if let Some(next) = model.borrow_mut().system_changed(prefers_dark) {
                    apply(&doc, next);
                }
            })
        });

        Self {
            doc: doc.clone(),
            model,
            _toggle: toggle,
            _media: media,
        }
    }

    /// The currently applied theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.model.borrow().applied()
    }

    /// Programmatic explicit choice; persisted and sticky like a click on
    /// the toggle.
    pub fn set_theme(&self, theme: Theme) {
        self.model.borrow_mut().set(theme);
        storage::write_theme(theme);
        apply(&self.doc, theme);
    }
}

fn media_query() -> Option<MediaQueryList> {
    web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .unwrap_or(None)
}

/// Set the document attribute, clear the FOUC guard class, and refresh the
/// toggle's icon and accessible label to describe the next state.
fn apply(doc: &Document, theme: Theme) {
    if let Some(root) = doc.document_element() {
        let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
    if let Some(body) = doc.body() {
        let _ = body.class_list().remove_1("theme-loading");
    }
    if let Some(icon) = doc.get_element_by_id("themeIcon") {
        icon.set_class_name(theme.icon_class());
    }
    if let Some(toggle) = doc.get_element_by_id("themeToggle") {
        let _ = toggle.set_attribute("aria-label", theme.toggle_label());
        let _ = toggle.set_attribute("title", theme.toggle_label());
    }
}
