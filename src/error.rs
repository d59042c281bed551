//! Error types for the wizard example generator.

use thiserror::Error;

/// Filesystem-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to walk directory: {0}")]
    Walk(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors raised while generating example sources and index documents
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Unknown framework '{0}' (expected one of: tf, torch, xgboost)")]
    UnknownFramework(String),

    #[error("Malformed generated name '{name}': expected 3 '_'-separated parts, got {parts}")]
    MalformedName { name: String, parts: usize },

    #[error("Template error: {0}")]
    Template(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<config::ConfigError> for GenerationError {
    fn from(err: config::ConfigError) -> Self {
        GenerationError::ConfigError(err.to_string())
    }
}

impl From<minijinja::Error> for GenerationError {
    fn from(err: minijinja::Error) -> Self {
        GenerationError::Template(err.to_string())
    }
}

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        GenerationError::Storage(StorageError::IoError(err))
    }
}
