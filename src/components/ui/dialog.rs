use icons::X;
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use leptos_ui::clx;
use tw_merge::*;

use crate::components::hooks::use_random::use_random_id_for;
use crate::components::ui::button::{Button, ButtonSize, ButtonVariant};

mod components {
    use super::*;
    clx! {DialogHeader, div, "modal-header"}
    clx! {DialogTitle, h5, "modal-title"}
    clx! {DialogBody, div, "modal-body"}
    clx! {DialogFooter, div, "modal-footer"}
}

pub use components::*;

/* ========================================================== */
/*                     ✨ FUNCTIONS ✨                        */
/* ========================================================== */

/// Non-blocking yes/no prompt.
///
/// Visible while `message` yields `Some`. Accept, cancel, the close button,
/// the backdrop and Escape all end in exactly one `on_answer` call.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into)] on_answer: Callback<bool>,
    #[prop(optional, into)] class: String,
    #[prop(default = "Confirmar")] title: &'static str,
    #[prop(default = "Eliminar")] accept_label: &'static str,
    #[prop(default = "Cancelar")] cancel_label: &'static str,
) -> impl IntoView {
    let title_id = StoredValue::new(use_random_id_for("confirm"));
    let merged_class = tw_merge!("modal fade show d-block", class);

    let _esc_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && message.get_untracked().is_some() {
            ev.prevent_default();
            on_answer.run(false);
        }
    });

    view! {
        <Show when=move || message.get().is_some() fallback=|| ().into_view()>
            <div class="modal-backdrop fade show" on:click=move |_| on_answer.run(false) />
            <div
                class=merged_class.clone()
                tabindex="-1"
                role="dialog"
                aria-modal="true"
                aria-labelledby=title_id.get_value()
                data-name="ConfirmDialog"
            >
                <div class="modal-dialog modal-dialog-centered">
                    <div class="modal-content">
                        <DialogHeader>
                            <DialogTitle attr:id=title_id.get_value()>{title}</DialogTitle>
                            <Button
                                class="ms-auto"
                                variant=ButtonVariant::Link
                                size=ButtonSize::Icon
                                attr:aria-label="Cerrar"
                                on:click=move |_| on_answer.run(false)
                            >
                                <X />
                            </Button>
                        </DialogHeader>
                        <DialogBody>
                            <p class="mb-0">{move || message.get().unwrap_or_default()}</p>
                        </DialogBody>
                        <DialogFooter>
                            <Button
                                variant=ButtonVariant::Secondary
                                on:click=move |_| on_answer.run(false)
                            >
                                {cancel_label}
                            </Button>
                            <Button
                                variant=ButtonVariant::Danger
                                on:click=move |_| on_answer.run(true)
                            >
                                {accept_label}
                            </Button>
                        </DialogFooter>
                    </div>
                </div>
            </div>
        </Show>
    }
}
