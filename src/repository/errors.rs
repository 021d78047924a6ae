use thiserror::Error;

use crate::backend::BackendError;

#[derive(Debug, Error)]
pub enum StorageError {
    // present but unparseable; distinct from "no notes yet"
    #[error("stored notes are corrupted: {0}")]
    Malformed(serde_json::Error),

    #[error("failed to serialize notes: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Backend(#[from] BackendError),
}
