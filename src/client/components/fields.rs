//! Labelled form inputs bound to a `Signal<String>`.

use dioxus::prelude::*;

#[component]
pub fn TextField(
    label: &'static str,
    value: Signal<String>,
    #[props(default = "text")] kind: &'static str,
    placeholder: Option<&'static str>,
    error: Option<String>,
) -> Element {
    let mut value = value;
    let placeholder = placeholder.unwrap_or_default();
    let input_class = if error.is_some() {
        "input input-error w-full"
    } else {
        "input w-full"
    };

    rsx!(
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            input {
                class: input_class,
                r#type: kind,
                placeholder: placeholder,
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
            }
            if let Some(error) = error {
                p { class: "label text-error", "{error}" }
            }
        }
    )
}

#[component]
pub fn TextAreaField(label: &'static str, value: Signal<String>, error: Option<String>) -> Element {
    let mut value = value;

    rsx!(
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            textarea {
                class: if error.is_some() { "textarea textarea-error w-full" } else { "textarea w-full" },
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
            }
            if let Some(ref error) = error {
                p { class: "label text-error", "{error}" }
            }
        }
    )
}

/// Select input over `(value, label)` options.
///
/// An empty-valued placeholder option is rendered first when `placeholder` is
/// set. `on_change` runs after the bound signal has been updated.
#[component]
pub fn SelectField(
    label: &'static str,
    value: Signal<String>,
    options: Vec<(String, String)>,
    placeholder: Option<&'static str>,
    error: Option<String>,
    on_change: Option<EventHandler<String>>,
) -> Element {
    let mut value = value;
    let current = value();

    rsx!(
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            select {
                class: if error.is_some() { "select select-error w-full" } else { "select w-full" },
                value: "{current}",
                onchange: move |evt| {
                    let selected = evt.value();
                    value.set(selected.clone());
                    if let Some(on_change) = on_change {
                        on_change.call(selected);
                    }
                },
                if let Some(placeholder) = placeholder {
                    option { value: "", selected: current.is_empty(), "{placeholder}" }
                }
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        selected: option_value == current,
                        value: "{option_value}",
                        "{option_label}"
                    }
                }
            }
            if let Some(ref error) = error {
                p { class: "label text-error", "{error}" }
            }
        }
    )
}
