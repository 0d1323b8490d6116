use leptos::prelude::*;
use leptos_ui::variants;

// Bootstrap button classes; the host page ships Bootstrap's stylesheet.
variants! {
    Button {
        base: "btn d-inline-flex align-items-center justify-content-center gap-2",
        variants: {
            variant: {
                Default: "btn-primary",
                Secondary: "btn-secondary",
                Danger: "btn-danger",
                Outline: "btn-outline-secondary",
                Link: "btn-link text-reset",
            },
            size: {
                Default: "px-3",
                Sm: "btn-sm",
                Icon: "p-1 lh-1",
            }
        },
        component: {
            element: button,
            support_href: true,
            support_aria_current: true
        }
    }
}
