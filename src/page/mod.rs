pub(crate) mod alerts;
pub(crate) mod forms;
pub(crate) mod motion;
pub(crate) mod rows;

use crate::components::PageOverlay;
use crate::config::PageConfig;
use crate::dom::{document, listen};
use crate::state::PageState;
use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

const OVERLAY_HOST_ID: &str = "registrant-admin-overlay";

/// Reads the config and runs [`init`] once the document is parsed.
pub(crate) fn start() {
    let state = PageState::new(PageConfig::from_window());

    let Some(document) = document() else {
        return;
    };

    if document.ready_state() == "loading" {
        listen(&document, "DOMContentLoaded", move |_| init(state.clone()));
    } else {
        init(state);
    }
}

/// Wires every page feature. Each one skips itself when its markup is absent.
pub(crate) fn init(state: PageState) {
    log!("page controller starting (api: {})", state.config.api_url);

    mount_overlay(state.clone());

    forms::bind_validation_guard();
    alerts::schedule_existing(&state);
    motion::stagger_rows();
    motion::bind_navbar_scroll(state.config.scroll_threshold_px);
    motion::bind_nav_link_hover();
    motion::bind_mobile_menu();
    rows::bind_row_actions(&state);
}

/// Mounts the confirmation dialog and toast stack into a host appended to `<body>`.
fn mount_overlay(state: PageState) {
    let Some(document) = document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(host) = document.create_element("div") else {
        return;
    };
    host.set_id(OVERLAY_HOST_ID);
    if body.append_child(&host).is_err() {
        return;
    }

    let host: web_sys::HtmlElement = host.unchecked_into();
    leptos::mount::mount_to(host, move || view! { <PageOverlay state=state /> }).forget();
}
