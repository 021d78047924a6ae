mod errors;
mod fs;
mod io_trait;
mod kv;
mod secure;
mod select;

#[cfg(test)] pub mod testing;
#[cfg(test)] mod tests;

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::lib_constants::TMP_FILENAME_INFIX;

pub use errors::BackendError;
pub use fs::{FsBackend, FsBackendImpl};
pub use io_trait::{BackendIo, Metadata, ProductionBackendIo};
pub use kv::{KvBackend, KvBackendImpl};
pub use secure::{SecureBackend, SecureBackendImpl};
pub use select::{Platform, select_backend};

// every write is a full replace of the value at `key`
#[async_trait]
pub trait Backend: Send + Sync {
    async fn read(&self, key: &str)
        -> Result<Option<String>, BackendError>;

    async fn write(&self, key: &str, value: &str)
        -> Result<(), BackendError>;
}

pub(crate) fn key_filename(key: &str) -> String {
    format!("{key}.json")
}

// replace through a uuid-named sibling and a rename; the tmp file is
// removed again if the rename fails
pub(crate) async fn replace_file<Io: BackendIo>(
    io: &Io,
    path: &Path,
    value: &str,
) -> Result<(), BackendError> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(format!("{TMP_FILENAME_INFIX}{}", io.generate_uuid()));
    let tmp_path = PathBuf::from(tmp_name);
    io.write_file(&tmp_path, value.as_bytes()).await?;
    if let Err(e) = io.rename_file(&tmp_path, path).await {
        if let Err(e) = io.remove_file(&tmp_path).await {
            log::error!(
                "failed to remove stale tmp file {}: {e}",
                tmp_path.display(),
            );
        }
        return Err(e.into());
    }
    Ok(())
}
