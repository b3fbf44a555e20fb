pub mod app_config;
mod conditions;
mod config;
mod records;

use thiserror::Error;

pub use app_config::AppConfig;
pub use conditions::Condition;
pub use config::{load_app_config, load_app_config_from_env};
pub use records::PriceRecord;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
