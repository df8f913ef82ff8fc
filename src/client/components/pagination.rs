use dioxus::prelude::*;

/// Page selector for a listing. Renders nothing when there are no pages.
#[component]
pub fn Pagination(page: usize, page_count: usize, on_select: EventHandler<usize>) -> Element {
    if page_count == 0 {
        return rsx!();
    }

    let previous = page.saturating_sub(1).max(1);
    let next = (page + 1).min(page_count);

    rsx!(
        div { class: "join justify-center",
            button {
                class: "join-item btn btn-sm",
                disabled: page <= 1,
                onclick: move |_| on_select.call(previous),
                "«"
            }
            for number in 1..=page_count {
                button {
                    key: "{number}",
                    class: page_button_class(number == page),
                    onclick: move |_| on_select.call(number),
                    "{number}"
                }
            }
            button {
                class: "join-item btn btn-sm",
                disabled: page >= page_count,
                onclick: move |_| on_select.call(next),
                "»"
            }
        }
    )
}

fn page_button_class(is_current: bool) -> &'static str {
    if is_current {
        "join-item btn btn-sm btn-active btn-primary"
    } else {
        "join-item btn btn-sm"
    }
}
