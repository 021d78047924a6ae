use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io;

use crate::backend::io_trait::{BackendIo, Metadata, ProductionBackendIo};
use crate::backend::{Backend, BackendError, key_filename, replace_file};

const REQUIRED_DIR_MODE: u32 = 0o700;
const GROUP_OTHER_MODE_BITS: u32 = 0o077;

pub type SecureBackend = SecureBackendImpl<ProductionBackendIo>;

// stand-in for a platform secure-item store: per-key files inside a
// directory that must be owned by us and readable by nobody else
pub struct SecureBackendImpl<Io: BackendIo> {
    pub(super) io: Io,
    dir: PathBuf,
}

impl<Io: BackendIo> std::fmt::Debug for SecureBackendImpl<Io> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureBackendImpl")
            .field("dir", &self.dir)
            .finish_non_exhaustive()
    }
}

impl SecureBackend {
    pub async fn new(
        dir: impl Into<PathBuf>,
    ) -> Result<SecureBackend, BackendError> {
        Self::new_internal(dir, ProductionBackendIo::new()).await
    }
}

impl<Io: BackendIo> SecureBackendImpl<Io> {
    pub(super) async fn new_internal(
        dir: impl Into<PathBuf>,
        io: Io,
    ) -> Result<SecureBackendImpl<Io>, BackendError> {
        let dir = dir.into();
        match io.metadata(&dir).await {
            Ok(meta) => validate_private_dir(&meta, io.getuid())?,
            Err(e) if e.kind() == io::ErrorKind::NotFound =>
                io.create_private_dir(&dir).await?,
            Err(e) => return Err(e.into()),
        }
        Ok(SecureBackendImpl { io, dir })
    }
}

#[async_trait]
impl<Io: BackendIo> Backend for SecureBackendImpl<Io> {
    async fn read(
        &self,
        key: &str,
    ) -> Result<Option<String>, BackendError> {
        match self.io.read_to_string(self.dir.join(key_filename(key))).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(
        &self,
        key: &str,
        value: &str,
    ) -> Result<(), BackendError> {
        replace_file(&self.io, &self.dir.join(key_filename(key)), value).await
    }
}

fn validate_private_dir(
    meta: &Metadata,
    uid: u32,
) -> Result<(), BackendError> {
    if !meta.is_dir {
        return Err(BackendError::NotADirectory);
    }
    if meta.uid != uid
        || meta.mode & REQUIRED_DIR_MODE != REQUIRED_DIR_MODE
        || meta.mode & GROUP_OTHER_MODE_BITS != 0 {
        return Err(BackendError::Permission);
    }
    Ok(())
}
