use crate::dom::{listen, query_all, query_one, set_style};
use leptos::ev;
use leptos::logging::log;
use leptos_dom::helpers::window_event_listener;

const TABLE_ROWS: &str = "tbody tr";
const NAVBAR: &str = ".navbar-modern";
const NAV_LINK: &str = ".nav-link";
const MENU_TOGGLER: &str = ".navbar-toggler";
const MENU_COLLAPSE: &str = ".navbar-collapse";

pub(crate) const SCROLLED: &str = "scrolled";

/// `index × 0.1s`, written in exact tenths.
pub(crate) fn stagger_delay(index: usize) -> String {
    match (index / 10, index % 10) {
        (0, 0) => "0s".to_string(),
        (whole, 0) => format!("{whole}s"),
        (whole, tenths) => format!("{whole}.{tenths}s"),
    }
}

pub(crate) fn stagger_rows() {
    for (i, row) in query_all(TABLE_ROWS).iter().enumerate() {
        set_style(row, "animation-delay", &stagger_delay(i));
    }
}

pub(crate) fn is_scrolled(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

fn sync_navbar(threshold_px: f64) {
    let Some(navbar) = query_one(NAVBAR) else {
        return;
    };
    let scroll_y = web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0);
    let scrolled = is_scrolled(scroll_y, threshold_px);

    let classes = navbar.class_list();
    // Skip the write when nothing changed; scroll fires a lot.
    if classes.contains(SCROLLED) != scrolled {
        let _ = classes.toggle_with_force(SCROLLED, scrolled);
    }
}

pub(crate) fn bind_navbar_scroll(threshold_px: f64) {
    if query_one(NAVBAR).is_none() {
        log!("no {NAVBAR} on this page");
        return;
    }

    sync_navbar(threshold_px);
    let _scroll_handle = window_event_listener(ev::scroll, move |_ev: web_sys::Event| {
        sync_navbar(threshold_px);
    });
}

pub(crate) fn bind_nav_link_hover() {
    for link in query_all(NAV_LINK) {
        let target = link.clone();
        listen(&link, "mouseenter", move |_| {
            set_style(&target, "transform", "translateY(-2px)")
        });
        let target = link.clone();
        listen(&link, "mouseleave", move |_| {
            set_style(&target, "transform", "translateY(0)")
        });
    }
}

/// Flips `show` on the collapsible menu.
pub(crate) fn toggle_menu() {
    if let Some(collapse) = query_one(MENU_COLLAPSE) {
        let _ = collapse.class_list().toggle("show");
    }
}

pub(crate) fn bind_mobile_menu() {
    let Some(toggler) = query_one(MENU_TOGGLER) else {
        return;
    };
    listen(&toggler, "click", move |_| toggle_menu());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_cascades_in_tenths() {
        assert_eq!(stagger_delay(0), "0s");
        assert_eq!(stagger_delay(1), "0.1s");
        assert_eq!(stagger_delay(3), "0.3s");
        assert_eq!(stagger_delay(10), "1s");
        assert_eq!(stagger_delay(12), "1.2s");
    }

    #[test]
    fn test_scroll_threshold_is_strict() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_double_toggle_restores_menu() {
        let document = crate::dom::document().expect("document");
        let menu = document.create_element("div").expect("div");
        menu.set_class_name("navbar-collapse");
        document.body().expect("body").append_child(&menu).expect("append");

        toggle_menu();
        assert!(menu.class_list().contains("show"));
        toggle_menu();
        assert!(!menu.class_list().contains("show"));

        menu.remove();
    }
}
