//! Shared configuration types for the posbridge workspace.

use thiserror::Error;

pub mod app_config;
pub mod config;

pub use app_config::{AppConfig, AppEnv};
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set. Raised before any
    /// network I/O; treat as a deployment defect, not a retryable failure.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but its value cannot be parsed.
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
