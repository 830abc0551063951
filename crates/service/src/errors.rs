use thiserror::Error;

use crate::repository::StoreError;
use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    /// A store contract violation leaked through; a bug, not caller error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

// Field-level failures fold into the validation kind so the boundary
// sees exactly one validation error.
impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Validation(msg) => Self::Validation(msg),
        }
    }
}
