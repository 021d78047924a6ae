mod app_config;
mod figment;

pub use app_config::AppConfig;
pub use figment::FigmentExt;
