//! Application-wide state shared through Dioxus context.
//!
//! Both values are provided once by [`crate::client::App`] and live for the
//! lifetime of the page.

pub mod api;

pub use api::{use_api, ApiContext, SessionState};
