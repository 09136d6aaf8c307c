//! Auto-dismissal of flash alerts.

use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement};

use crate::consts::ALERT_DISMISS_MS;

/// Close every `.alert-dismissible` a fixed delay after page load. Alerts
/// the user already closed (no `show` class left) are left alone.
pub fn attach(doc: &Document) {
    for alert in crate::dom::query_all::<HtmlElement>(doc, ".alert-dismissible") {
        Timeout::new(ALERT_DISMISS_MS, move || {
            if alert.class_list().contains("show") {
                let _ = alert.class_list().remove_1("show");
                alert.remove();
            }
        })
        .forget();
    }
}
