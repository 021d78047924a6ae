use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io;

use crate::backend::io_trait::{BackendIo, ProductionBackendIo};
use crate::backend::{Backend, BackendError, replace_file};

pub type KvBackend = KvBackendImpl<ProductionBackendIo>;

// browser-style store: one JSON object file holding every key, read
// whole and written whole on each mutation
pub struct KvBackendImpl<Io: BackendIo> {
    pub(super) io: Io,
    state_file: PathBuf,
}

impl KvBackend {
    pub fn new(state_file: impl Into<PathBuf>) -> KvBackend {
        Self::new_internal(state_file, ProductionBackendIo::new())
    }
}

impl<Io: BackendIo> KvBackendImpl<Io> {
    pub(super) fn new_internal(
        state_file: impl Into<PathBuf>,
        io: Io,
    ) -> KvBackendImpl<Io> {
        KvBackendImpl { io, state_file: state_file.into() }
    }

    async fn read_state(
        &self,
    ) -> Result<BTreeMap<String, String>, BackendError> {
        match self.io.read_to_string(&self.state_file).await {
            Ok(contents) if contents.trim().is_empty() =>
                Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound =>
                Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl<Io: BackendIo> Backend for KvBackendImpl<Io> {
    async fn read(
        &self,
        key: &str,
    ) -> Result<Option<String>, BackendError> {
        Ok(self.read_state().await?.remove(key))
    }

    async fn write(
        &self,
        key: &str,
        value: &str,
    ) -> Result<(), BackendError> {
        let mut state = self.read_state().await?;
        state.insert(key.to_owned(), value.to_owned());
        let data = serde_json::to_string(&state)?;
        if let Some(parent) = self.state_file.parent() {
            if !parent.as_os_str().is_empty() {
                self.io.create_dir_all(parent).await?;
            }
        }
        replace_file(&self.io, &self.state_file, &data).await
    }
}
