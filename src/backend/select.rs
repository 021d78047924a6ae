use std::path::PathBuf;
use std::sync::Arc;

use crate::backend::{
    Backend,
    BackendError,
    FsBackend,
    KvBackend,
    SecureBackend,
};
use crate::config::AppConfig;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Platform {
    Web,
    Native { data_dir: Option<PathBuf> },
}

impl Platform {
    // the compile target stands in for the app framework's runtime
    // platform check; fixed for the life of the process
    pub fn detect(config: &AppConfig) -> Platform {
        if cfg!(target_family = "wasm") {
            Platform::Web
        } else {
            Platform::Native {
                data_dir: config.data_directory.clone(),
            }
        }
    }
}

pub async fn select_backend(
    platform: Platform,
    config: &AppConfig,
) -> Result<Arc<dyn Backend>, BackendError> {
    Ok(match platform {
        Platform::Web =>
            Arc::new(KvBackend::new(&config.state_file)),
        Platform::Native { data_dir: Some(dir) } =>
            Arc::new(FsBackend::new(dir)),
        Platform::Native { data_dir: None } =>
            Arc::new(SecureBackend::new(&config.secure_directory).await?),
    })
}
