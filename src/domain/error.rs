//! Domain error types

use thiserror::Error;

/// Error from the key-value persistence backend.
///
/// Always recovered inside `ConfigStore` by falling back to defaults or
/// dropping the write; surfaced here so adapters and tests can name the
/// failure precisely.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Failed to read key '{key}': {message}")]
    Read { key: String, message: String },

    #[error("Failed to write key '{key}': {message}")]
    Write { key: String, message: String },

    #[error("Failed to delete key '{key}': {message}")]
    Delete { key: String, message: String },

    #[error("No persistence backend available")]
    Unavailable,
}

/// Error when serializing a configuration document
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to serialize config: {0}")]
    Serialize(String),
}

/// Error when importing a configuration document.
///
/// Unlike persistence failures, import failures are surfaced to the caller
/// with a full description rather than silently recovered.
#[derive(Debug, Clone, Error)]
pub enum ImportError {
    #[error("Config import failed: invalid JSON: {0}")]
    Malformed(String),

    #[error("Config validation failed: {0}")]
    Validation(String),
}

/// Error when querying the hosting environment's feature surface
#[derive(Debug, Clone, Error)]
#[error("Environment probe failed: {message}")]
pub struct EnvironmentError {
    pub message: String,
}

/// Error when checking the remote voice-config status endpoint
#[derive(Debug, Clone, Error)]
pub enum StatusError {
    #[error("Config endpoint unreachable: {0}")]
    Unreachable(String),

    #[error("Config endpoint returned HTTP {0}")]
    Http(u16),

    #[error("Config endpoint returned an unreadable body: {0}")]
    Malformed(String),
}
