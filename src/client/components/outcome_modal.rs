use dioxus::prelude::*;

use crate::model::outcome::Outcome;

/// Modal shown while `outcome` holds a value.
///
/// Closing clears the signal and then hands the closed outcome to `on_close`,
/// which is where callers navigate or reload after a success.
#[component]
pub fn OutcomeModal(
    outcome: Signal<Option<Outcome>>,
    on_close: Option<EventHandler<Outcome>>,
) -> Element {
    let mut outcome = outcome;
    let Some(current) = outcome() else {
        return rsx!();
    };

    let title = current.title().to_string();
    let message = current.message().to_string();
    let title_class = if current.is_success() {
        "text-success"
    } else {
        "text-error"
    };

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "text-lg font-bold {title_class}", "{title}" }
                p { class: "py-4", "{message}" }
                div { class: "modal-action",
                    button {
                        class: "btn",
                        onclick: move |_| {
                            outcome.set(None);
                            if let Some(on_close) = on_close {
                                on_close.call(current.clone());
                            }
                        },
                        "Close"
                    }
                }
            }
        }
    )
}
