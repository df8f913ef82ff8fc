use thiserror::Error;

use crate::validation::FieldErrors;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required.")]
    Required(&'static str),
    /// Several fields of one form failed; each message is kept per field.
    #[error("{}", .0.summary())]
    Fields(FieldErrors),
}
