#![allow(non_snake_case)]

use dioxus_logger::tracing::Level;

fn main() {
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    #[cfg(feature = "web")]
    dioxus::launch(paws::client::App);
}
