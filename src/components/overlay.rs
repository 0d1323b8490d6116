use icons::X;
use leptos::prelude::*;

use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, ConfirmDialog, Toast, ToastBody, ToastStack,
};
use crate::state::{PageContext, PageState};

/// Everything the controller renders itself: the delete confirmation and
/// the toast stack for failure notices.
#[component]
pub(crate) fn PageOverlay(state: PageState) -> impl IntoView {
    provide_context(PageContext(state.clone()));

    let pending = state.pending_confirm;
    let message = Signal::derive(move || pending.get().map(|req| req.message));
    let on_answer = Callback::new(move |accepted: bool| {
        crate::page::rows::on_confirm_answer(&state, accepted)
    });

    view! {
        <ConfirmDialog message=message on_answer=on_answer />
        <NoticeStack />
    }
}

#[component]
fn NoticeStack() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let notices = ctx.0.notices;

    view! {
        <ToastStack attr:aria-live="polite" attr:aria-atomic="true">
            <For
                each=move || notices.get()
                key=|notice| notice.id
                let:notice
            >
                {
                    let id = notice.id;
                    view! {
                        <Toast class=notice.tone.as_ref().to_string() attr:role="status">
                            <div class="d-flex">
                                <ToastBody>{notice.message}</ToastBody>
                                <Button
                                    class="me-2 m-auto"
                                    variant=ButtonVariant::Link
                                    size=ButtonSize::Icon
                                    attr:aria-label="Cerrar"
                                    on:click=move |_| notices.update(|list| list.retain(|n| n.id != id))
                                >
                                    <X />
                                </Button>
                            </div>
                        </Toast>
                    }
                }
            </For>
        </ToastStack>
    }
}
