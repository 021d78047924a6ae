use thiserror::Error;

use tokio::io::Error as IoError;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error("storage root is not a directory")]
    NotADirectory,

    #[error("insufficient permissions to access storage")]
    Permission,

    #[error("storage state is corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),
}
