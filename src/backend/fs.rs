use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io;

use crate::backend::io_trait::{BackendIo, ProductionBackendIo};
use crate::backend::{Backend, BackendError, key_filename, replace_file};

pub type FsBackend = FsBackendImpl<ProductionBackendIo>;

// one file per key under `dir`
pub struct FsBackendImpl<Io: BackendIo> {
    pub(super) io: Io,
    dir: PathBuf,
}

impl FsBackend {
    pub fn new(dir: impl Into<PathBuf>) -> FsBackend {
        Self::new_internal(dir, ProductionBackendIo::new())
    }
}

impl<Io: BackendIo> FsBackendImpl<Io> {
    pub(super) fn new_internal(
        dir: impl Into<PathBuf>,
        io: Io,
    ) -> FsBackendImpl<Io> {
        FsBackendImpl { io, dir: dir.into() }
    }
}

#[async_trait]
impl<Io: BackendIo> Backend for FsBackendImpl<Io> {
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
        // before every write; already-existing is not an error
        self.io.create_dir_all(&self.dir).await?;
        replace_file(&self.io, &self.dir.join(key_filename(key)), value).await
    }
}
