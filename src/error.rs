//! Error types for configuration resolution and tfvars export.

use std::path::PathBuf;
use thiserror::Error;

/// Provider-related errors
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to generate {what}: {reason}")]
    Generation { what: &'static str, reason: String },

    #[error("Failed to determine working directory for kubeconfig path: {0}")]
    WorkingDirectory(#[source] std::io::Error),

    #[error("Failed to convert config to json: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to dump the json config to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration:\n{0}")]
    Validation(String),

    #[error("Provider '{0}' is already initialized")]
    AlreadyInitialized(&'static str),

    #[error("Provider '{0}' must be initialized before dumping its config")]
    NotInitialized(&'static str),
}

impl From<config::ConfigError> for ProviderError {
    fn from(err: config::ConfigError) -> Self {
        ProviderError::Config(err.to_string())
    }
}
