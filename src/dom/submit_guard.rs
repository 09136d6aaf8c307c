//! Validity gating and processing state for guarded forms.
//!
//! Submission is fire-and-forget: a valid submit hands control to the
//! browser and success shows up only as navigation. The recovery timer is
//! the safety net for the silent-failure case where no navigation ever
//! comes and the button would otherwise stay stuck disabled.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlButtonElement, HtmlFormElement};

use crate::consts::SUBMIT_RECOVERY_MS;
use crate::dom::timer::TimerSlot;
use crate::state::submit::{SubmitGuard, SubmitOutcome};

const PROCESSING_HTML: &str = "<span class=\"spinner-border spinner-border-sm\" role=\"status\" aria-hidden=\"true\"></span> Processing...";

/// One guard per `form.needs-validation` on the page. Dropping the set
/// detaches all submit listeners and cancels pending recovery timers.
pub struct SubmitGuardSet {
    _listeners: Vec<EventListener>,
    _slots: Vec<Rc<RefCell<TimerSlot>>>,
}

impl SubmitGuardSet {
    pub fn attach(doc: &Document) -> Self {
        Self::with_timeout(doc, SUBMIT_RECOVERY_MS)
    }

    /// `recovery_ms` bounds how long a submit button may stay disabled
    /// when no navigation follows the submission.
    pub fn with_timeout(doc: &Document, recovery_ms: u32) -> Self {
        let mut listeners = Vec::new();
        let mut slots = Vec::new();
        for form in crate::dom::query_all::<HtmlFormElement>(doc, "form.needs-validation") {
            let guard = Rc::new(RefCell::new(SubmitGuard::new(u64::from(recovery_ms))));
            let slot = Rc::new(RefCell::new(TimerSlot::new()));
            let target: web_sys::EventTarget = form.clone().into();
            let listener = {
                let guard = Rc::clone(&guard);
                let slot = Rc::clone(&slot);
                EventListener::new(&target, "submit", move |event: &Event| {
                    on_submit(&form, event, &guard, &slot, recovery_ms);
                })
            };
            listeners.push(listener);
            slots.push(slot);
        }
        log::debug!("submit guard: {} form(s) wired", listeners.len());
        Self {
            _listeners: listeners,
            _slots: slots,
        }
    }
}

fn on_submit(
    form: &HtmlFormElement,
    event: &Event,
    guard: &Rc<RefCell<SubmitGuard>>,
    slot: &Rc<RefCell<TimerSlot>>,
    recovery_ms: u32,
) {
    let button = submit_button(form);
    let content = button.as_ref().map(|b| b.inner_html()).unwrap_or_default();
    let outcome = guard
        .borrow_mut()
        .on_submit(now_ms(), form.check_validity(), &content);

    match outcome {
        SubmitOutcome::Block => {
            event.prevent_default();
            event.stop_propagation();
        }
        SubmitOutcome::Proceed => {
            if let Some(button) = button {
                button.set_inner_html(PROCESSING_HTML);
                button.set_disabled(true);
                let guard = Rc::clone(guard);
                slot.borrow_mut().schedule(recovery_ms, move || {
                    if let Some(original) = guard.borrow_mut().poll(now_ms()) {
                        // Still disabled means the browser never navigated.
                        if button.disabled() {
                            button.set_inner_html(&original);
                            button.set_disabled(false);
                        }
                    }
                });
            }
        }
    }
    // Either way the form has now been validated against.
    let _ = form.class_list().add_1("was-validated");
}

fn submit_button(form: &HtmlFormElement) -> Option<HtmlButtonElement> {
    match form.query_selector("button[type=\"submit\"]") {
        Ok(Some(element)) => element.dyn_into().ok(),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
