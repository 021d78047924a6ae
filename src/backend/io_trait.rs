use std::path::Path;

use async_trait::async_trait;
use tokio::{fs, io};
use uuid::Uuid;

use crate::rng::make_uuid;

#[async_trait]
pub trait BackendIo: Send + Sync {
    async fn read_to_string(
        &self,
        path: impl AsRef<Path> + Send,
    ) -> io::Result<String>;

    async fn write_file(
        &self,
        path: impl AsRef<Path> + Send,
        data: impl AsRef<[u8]> + Send,
    ) -> io::Result<()>;

    async fn rename_file(
        &self,
        from: impl AsRef<Path> + Send,
        to: impl AsRef<Path> + Send,
    ) -> io::Result<()>;

    async fn remove_file(
        &self,
        path: impl AsRef<Path> + Send,
    ) -> io::Result<()>;

    async fn create_dir_all(
        &self,
        path: impl AsRef<Path> + Send,
    ) -> io::Result<()>;

    async fn create_private_dir(
        &self,
        path: impl AsRef<Path> + Send,
    ) -> io::Result<()>;

    async fn metadata(
        &self,
        path: impl AsRef<Path> + Send,
    ) -> io::Result<Metadata>;

    fn getuid(&self) -> u32;

    fn generate_uuid(&self) -> Uuid;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Metadata {
    pub is_dir: bool,
    pub uid: u32,
    pub mode: u32,
}

pub struct ProductionBackendIo;

impl ProductionBackendIo {
    pub fn new() -> Self {
        ProductionBackendIo
    }
}

impl Default for ProductionBackendIo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BackendIo for ProductionBackendIo {
    async fn read_to_string(
        &self,
        path: impl AsRef<Path> + Send,
    ) -> io::Result<String> {
        fs::read_to_string(path).await
    }

    async fn write_file(
        &self,
        path: impl AsRef<Path> + Send,
        data: impl AsRef<[u8]> + Send,
    ) -> io::Result<()> {
        fs::write(path, data).await
    }

    async fn rename_file(
        &self,
        from: impl AsRef<Path> + Send,
        to: impl AsRef<Path> + Send,
    ) -> io::Result<()> {
        fs::rename(from, to).await
    }

    async fn remove_file(
        &self,
        path: impl AsRef<Path> + Send,
    ) -> io::Result<()> {
        fs::remove_file(path).await
    }

    async fn create_dir_all(
        &self,
        path: impl AsRef<Path> + Send,
    ) -> io::Result<()> {
        fs::create_dir_all(path).await
    }

    async fn create_private_dir(
        &self,
        path: impl AsRef<Path> + Send,
    ) -> io::Result<()> {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        builder.mode(0o700);
        builder.create(path).await
    }

    async fn metadata(
        &self,
        path: impl AsRef<Path> + Send,
    ) -> io::Result<Metadata> {
        let meta = fs::metadata(path).await?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            Ok(Metadata {
                is_dir: meta.is_dir(),
                uid: meta.uid(),
                mode: meta.mode(),
            })
        }
        #[cfg(not(unix))]
        Ok(Metadata {
            is_dir: meta.is_dir(),
            uid: 0,
            mode: 0o700,
        })
    }

    fn getuid(&self) -> u32 {
        #[cfg(unix)]
        unsafe {
            libc::getuid()
        }
        #[cfg(not(unix))]
        0
    }

    fn generate_uuid(&self) -> Uuid {
        make_uuid(&mut rand::rng())
    }
}
