use crate::error::Error;

/// What happened when the user triggered an operation.
///
/// Views turn the `Result` of an operation into an `Outcome` and hand it to a
/// modal; the modal never inspects operation state of its own.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Success { title: String, message: String },
    Failure { title: String, message: String },
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            title: "Success".to_string(),
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    pub fn from_result<T>(result: &Result<T, Error>, success_message: &str) -> Self {
        match result {
            Ok(_) => Self::success(success_message),
            Err(err) => Self::failure(err.user_message()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Success { title, .. } | Self::Failure { title, .. } => title,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } | Self::Failure { message, .. } => message,
        }
    }
}
