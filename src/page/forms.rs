use crate::dom::{listen, query_all};
use leptos::logging::log;
use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

pub(crate) const NEEDS_VALIDATION: &str = ".needs-validation";
pub(crate) const WAS_VALIDATED: &str = "was-validated";

pub(crate) fn bind_validation_guard() {
    let forms: Vec<HtmlFormElement> = query_all(NEEDS_VALIDATION)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlFormElement>().ok())
        .collect();

    if forms.is_empty() {
        return;
    }
    log!("validation guard on {} form(s)", forms.len());

    for form in forms {
        let target = form.clone();
        listen(&form, "submit", move |ev| guard_submit(&target, &ev));
    }
}

/// Blocks an invalid submission and marks the form for per-field styling.
pub(crate) fn guard_submit(form: &HtmlFormElement, ev: &web_sys::Event) {
    if !form.check_validity() {
        ev.prevent_default();
        ev.stop_propagation();
    }
    let _ = form.class_list().add_1(WAS_VALIDATED);
}
