use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::bin_constants::{
    DEFAULT_DATA_DIR,
    DEFAULT_SECURE_DIR,
    DEFAULT_STATE_FILE,
};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AppConfig {
    // unset means there is no usable file-system root and the secure
    // store is selected instead
    pub data_directory: Option<PathBuf>,
    pub state_file: PathBuf,
    pub secure_directory: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_directory: Some(PathBuf::from(DEFAULT_DATA_DIR)),
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
            secure_directory: PathBuf::from(DEFAULT_SECURE_DIR),
        }
    }
}
