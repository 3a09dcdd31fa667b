//! Error types for gormgen

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for gormgen operations
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during model generation
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Error loading env file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("Failed to get columns for table {table}: {source}")]
    Introspection {
        table: String,
        #[source]
        source: gormgen_db::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<config::ConfigError> for CodegenError {
    fn from(err: config::ConfigError) -> Self {
        CodegenError::ConfigError(err.to_string())
    }
}
