use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {ToastStack, div, "toast-container position-fixed top-0 end-0 p-3"}
    clx! {Toast, div, "toast show align-items-center border-0 mb-2"}
    clx! {ToastBody, div, "toast-body"}
}

pub use components::*;
