//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading the account configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse account file '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Invalid configuration value.
    #[error("Validation error in '{path}': {message}")]
    ValidationError { path: String, message: String },
}
