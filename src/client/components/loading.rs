use dioxus::prelude::*;

#[component]
pub fn Loading(label: Option<&'static str>) -> Element {
    let label = label.unwrap_or("Loading...");

    rsx!(
        div { class: "flex flex-col items-center gap-2 p-8",
            span { class: "loading loading-spinner loading-lg" }
            p { class: "text-sm opacity-70", "{label}" }
        }
    )
}
