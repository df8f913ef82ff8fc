use dioxus::prelude::*;

#[component]
pub fn ConfirmModal(
    title: &'static str,
    message: String,
    #[props(default)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "text-lg font-bold", "{title}" }
                p { class: "py-4", "{message}" }
                div { class: "modal-action",
                    button {
                        class: "btn",
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-error",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Delete"
                    }
                }
            }
        }
    )
}
