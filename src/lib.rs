//! Paws and Tails pet adoption client.
//!
//! The crate is split between framework-free building blocks (session state,
//! the listing pipeline, the REST gateway, form validation) and the Dioxus
//! view layer under [`client`] which wires them together in the browser.

pub mod config;
pub mod error;
pub mod gateway;
pub mod listing;
pub mod model;
pub mod session;
pub mod validation;

#[cfg(feature = "web")]
pub mod client;
