//! Thin helpers over `web_sys` for a page this crate does not render.
//!
//! Lookups return `Option`/`Vec` so a page that lacks a feature's markup
//! just skips that feature.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, NodeList};

pub(crate) fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn collect(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|d| d.query_selector_all(selector).ok())
        .map(collect)
        .unwrap_or_default()
}

pub(crate) fn query_one(selector: &str) -> Option<Element> {
    document().and_then(|d| d.query_selector(selector).ok().flatten())
}

pub(crate) fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .ok()
        .map(collect)
        .unwrap_or_default()
}

pub(crate) fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Registers `f` for the lifetime of the page.
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    f: impl FnMut(web_sys::Event) + 'static,
) {
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(f);
    let _ = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    // Listeners live as long as the page; nothing ever removes them.
    cb.forget();
}

pub(crate) fn text_of(el: &Element) -> String {
    el.text_content().unwrap_or_default().trim().to_string()
}

pub(crate) fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(el) = el.dyn_ref::<web_sys::HtmlElement>() {
        let _ = el.style().set_property(property, value);
    }
}

/// Current value of an `<input>`, `<select>` or `<textarea>`.
pub(crate) fn field_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = el.dyn_ref::<web_sys::HtmlSelectElement>() {
        return Some(select.value());
    }
    el.dyn_ref::<web_sys::HtmlTextAreaElement>()
        .map(|area| area.value())
}

pub(crate) fn set_field_value(el: &Element, value: &str) {
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = el.dyn_ref::<web_sys::HtmlSelectElement>() {
        select.set_value(value);
    } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

/// Finds the `<tr>` whose controls carry `data-id="{id}"`.
///
/// Compares attribute values instead of building a selector so ids never
/// need CSS escaping.
pub(crate) fn find_row(id: &str) -> Option<Element> {
    query_all("tr[data-id], tr [data-id]")
        .into_iter()
        .find(|el| el.get_attribute("data-id").as_deref() == Some(id))
        .and_then(|el| el.closest("tr").ok().flatten())
}
