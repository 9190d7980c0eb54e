use thiserror::Error;

pub mod app_config;
pub mod beers;
pub mod config;
pub mod cookies;
pub mod exclusions;
pub mod stores;

pub use app_config::{AppConfig, Environment};
pub use beers::Beer;
pub use config::{load_app_config, load_app_config_from_env};
pub use cookies::CookieJar;
pub use exclusions::{load_exclusions, ExclusionList};
pub use stores::Store;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read exclusions file {path}: {source}")]
    ExclusionsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse exclusions file: {0}")]
    ExclusionsFileParse(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}
