use crate::dom::{document, listen, query_all, query_one};
use crate::state::{NoticeTone, PageState};
use leptos::logging::{log, warn};
use leptos_dom::helpers::set_timeout;
use std::time::Duration;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

pub(crate) const ALERT: &str = ".alert";
const ALERT_HOST: &str = ".card-body";
const ALERT_ANCHOR: &str = ".table-responsive";

/// Schedules every alert already on the page for dismissal.
pub(crate) fn schedule_existing(state: &PageState) {
    let alerts = query_all(ALERT);
    if !alerts.is_empty() {
        log!("auto-dismissing {} alert(s)", alerts.len());
    }
    for alert in alerts {
        schedule_dismiss(alert, state.config.alert_dismiss_ms);
    }
}

pub(crate) fn schedule_dismiss(alert: Element, after_ms: u32) {
    set_timeout(move || dismiss(&alert), Duration::from_millis(after_ms as u64));
}

/// Closes an alert. A no-op when it is no longer in the document.
pub(crate) fn dismiss(alert: &Element) {
    if !alert.is_connected() {
        return;
    }
    if bootstrap_close(alert) {
        return;
    }
    let _ = alert.class_list().remove_1("show");
    alert.remove();
}

/// `new bootstrap.Alert(el).close()` when Bootstrap's bundle is loaded.
fn bootstrap_close(alert: &Element) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(bootstrap) = window.get("bootstrap") else {
        return false;
    };
    let bootstrap: JsValue = bootstrap.into();

    let Ok(ctor) = js_sys::Reflect::get(&bootstrap, &"Alert".into())
        .and_then(|c| c.dyn_into::<js_sys::Function>())
    else {
        return false;
    };
    let Ok(instance) = js_sys::Reflect::construct(&ctor, &js_sys::Array::of1(alert)) else {
        return false;
    };
    let Ok(close) = js_sys::Reflect::get(&instance, &"close".into())
        .and_then(|c| c.dyn_into::<js_sys::Function>())
    else {
        return false;
    };

    close.call0(&instance).is_ok()
}

fn has_bootstrap() -> bool {
    web_sys::window()
        .and_then(|w| w.get("bootstrap"))
        .is_some()
}

/// Builds `<div class="alert alert-success alert-dismissible fade show">`.
pub(crate) fn build_success_alert(message: &str) -> Option<Element> {
    let document = document()?;
    let alert = document.create_element("div").ok()?;
    alert.set_class_name("alert alert-success alert-dismissible fade show");
    let _ = alert.set_attribute("role", "alert");
    alert.set_text_content(Some(message));

    let close = document.create_element("button").ok()?;
    let _ = close.set_attribute("type", "button");
    close.set_class_name("btn-close");
    let _ = close.set_attribute("data-bs-dismiss", "alert");
    let _ = close.set_attribute("aria-label", "Cerrar");
    if !has_bootstrap() {
        // Bootstrap's data API handles the button when the bundle is present.
        let target = alert.clone();
        listen(&close, "click", move |_| dismiss(&target));
    }
    let _ = alert.append_child(&close);

    Some(alert)
}

/// Shows a success alert above the records table and schedules its dismissal.
///
/// Pages without the card layout get a toast instead.
pub(crate) fn insert_success_alert(state: &PageState, message: &str) {
    let host = query_one(ALERT_HOST);
    let alert = build_success_alert(message);

    match (host, alert) {
        (Some(host), Some(alert)) => {
            let anchor: Option<web_sys::Node> =
                crate::dom::query_in(&host, ALERT_ANCHOR).map(Into::into);
            if host.insert_before(&alert, anchor.as_ref()).is_err() {
                warn!("could not insert success alert");
                state.push_notice(NoticeTone::Success, message);
                return;
            }
            schedule_dismiss(alert, state.config.alert_dismiss_ms);
        }
        _ => {
            state.push_notice(NoticeTone::Success, message);
        }
    }
}
