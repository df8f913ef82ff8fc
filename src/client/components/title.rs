use dioxus::prelude::*;

use crate::client::router::Route;

pub const APP_NAME: &str = "Paws & Tails";

#[component]
pub fn PawsTitleButton() -> Element {
    let version = env!("CARGO_PKG_VERSION");

    rsx!(
        Link {
            to: Route::Home {},
            div { class: "flex items-center gap-2",
                p { class: "text-xl",
                    "{APP_NAME}"
                }
                p { class: "text-xs",
                    "v{version}"
                }
            }
        }
    )
}
