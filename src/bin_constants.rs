pub const DEFAULT_CONFIG_FILE: &str = "pocketnotes.toml";
pub const APP_CONFIG_ENV_PREFIX: &str = "POCKETNOTES_";

pub const DEFAULT_DATA_DIR: &str = "pocketnotes-data";
pub const DEFAULT_STATE_FILE: &str = "pocketnotes-state.json";
pub const DEFAULT_SECURE_DIR: &str = "pocketnotes-secure";
