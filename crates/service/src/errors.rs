use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The database could not be reached or rejected the read/write.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl ServiceError {
    pub fn unavailable(cause: impl std::fmt::Display) -> Self { Self::StorageUnavailable(cause.to_string()) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Db(msg) => Self::unavailable(msg),
        }
    }
}
