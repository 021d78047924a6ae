use thiserror::Error;

use crate::backend::BackendError;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("failed to serialize identity: {0}")]
    Serialization(#[from] serde_json::Error),
}
