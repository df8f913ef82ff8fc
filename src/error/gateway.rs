use dioxus_logger::tracing;
use thiserror::Error;

/// Failure outcomes of a single call to the remote API.
///
/// None of these are retried; every variant is terminal for the attempt.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// The request never produced an HTTP response (network down, CORS, DNS).
    #[error("Failed to send request: {0}")]
    Transport(String),
    /// The API answered with a non-2xx status.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The request body could not be serialized, so nothing was sent.
    #[error("Failed to encode request body: {0}")]
    Encode(String),
    /// The body of a 2xx response did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
    /// The API answered 2xx but reported `success: false`.
    #[error("Request was rejected by the API")]
    Rejected,
}

impl GatewayError {
    pub(crate) fn user_message(&self) -> String {
        match self {
            Self::Status { status, message } if *status < 500 && !message.trim().is_empty() => {
                tracing::debug!(status = %status, "{}", self);

                message.clone()
            }
            Self::Status { status, .. } if *status < 500 => {
                tracing::debug!(status = %status, "{}", self);

                format!("Request failed with status {}", status)
            }
            Self::Rejected => {
                tracing::warn!("{}", self);

                "The request was not accepted, please try again.".to_string()
            }
            Self::Transport(_) => {
                tracing::error!("{}", self);

                "Could not reach the server, please try again.".to_string()
            }
            Self::Encode(_) => {
                tracing::error!("{}", self);

                "Something went wrong preparing the request, please try again.".to_string()
            }
            Self::Status { .. } | Self::Decode(_) => {
                tracing::error!("{}", self);

                "The server ran into a problem, please try again later.".to_string()
            }
        }
    }
}
