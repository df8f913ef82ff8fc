use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{router::Route, store::SessionState},
    config::Config,
    session::BrowserStorage,
};

const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_BROWSER_JS: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        let config = Config::from_env().unwrap_or_else(|e| {
            tracing::error!("Invalid configuration, falling back to defaults: {}", e);
            Config::default()
        });

        Signal::new(config)
    });
    use_context_provider(|| Signal::new(SessionState::restore(BrowserStorage)));

    rsx! {
        document::Stylesheet { href: DAISYUI_CSS }
        document::Script { src: TAILWIND_BROWSER_JS }
        Router::<Route> {}
    }
}
