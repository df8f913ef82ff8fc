use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    PawsError(#[from] paws::error::Error),
    #[error(transparent)]
    StorageError(#[from] paws::error::storage::StorageError),
    #[error(transparent)]
    GatewayError(#[from] paws::error::gateway::GatewayError),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}
