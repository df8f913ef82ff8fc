//! Error types for the Paws client.
//!
//! Each domain (REST gateway, persistent storage, configuration, form validation)
//! has its own error enum in a submodule. They are aggregated into [`Error`] with
//! `#[from]` conversions so operations spanning several domains can use `?`.
//! Views never render an error's `Display` output directly; they go through
//! [`Error::user_message`], which logs the detail and returns safe text.

pub mod config;
pub mod gateway;
pub mod storage;
pub mod validation;

use dioxus_logger::tracing;
use thiserror::Error;

use crate::error::{
    config::ConfigError, gateway::GatewayError, storage::StorageError,
    validation::ValidationError,
};

/// Main error type for the Paws client.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration error (invalid build-time environment value).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Remote API error (transport, non-2xx status, undecodable body).
    #[error(transparent)]
    GatewayError(#[from] GatewayError),
    /// Browser storage error while persisting or clearing the session.
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// Form input rejected before any request was sent.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
}

impl Error {
    /// Text suitable for showing to the user.
    ///
    /// Validation and API-provided messages are passed through because they are
    /// written for people. Everything else is logged and replaced with a generic
    /// message so transport or storage internals never reach the page.
    pub fn user_message(&self) -> String {
        match self {
            Self::ValidationError(err) => err.to_string(),
            Self::GatewayError(err) => err.user_message(),
            Self::StorageError(err) => {
                tracing::error!("{}", err);

                "Your browser refused to save the session, check that site storage is enabled."
                    .to_string()
            }
            Self::ConfigError(err) => {
                tracing::error!("{}", err);

                "The application is misconfigured, please contact the site administrator."
                    .to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    mod user_message {
        use crate::error::{
            gateway::GatewayError, storage::StorageError, validation::ValidationError, Error,
        };

        /// Expect validation messages to be shown as-is
        #[test]
        fn passes_through_validation_message() {
            let err: Error = ValidationError::Required("Email").into();

            assert_eq!(err.user_message(), "Email is required.");
        }

        /// Expect the API's own error text for rejected requests
        #[test]
        fn passes_through_api_message() {
            let err: Error = GatewayError::Status {
                status: 401,
                message: "Invalid email or password".to_string(),
            }
            .into();

            assert_eq!(err.user_message(), "Invalid email or password");
        }

        /// Expect storage internals to be hidden behind a generic message
        #[test]
        fn hides_storage_detail() {
            let err: Error = StorageError::Backend("QuotaExceededError".to_string()).into();

            let message = err.user_message();

            assert!(!message.contains("QuotaExceededError"));
        }
    }
}
