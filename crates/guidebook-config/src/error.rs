//! Error types for style guide option loading and config composition.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Environment resolution errors
    #[error("invalid environment {value:?}: expected \"development\" or \"production\"")]
    InvalidEnvironment { value: String },

    // Derived-config errors
    #[error("unknown style guide component slot: {slot}")]
    UnknownSlot { slot: String },

    // User override errors
    #[error("webpack_config must be a table of bundler settings, got {found}")]
    InvalidOverrideType { found: &'static str },

    // Host scaffold errors
    #[error("host bundler config at {path} could not be loaded: {message}")]
    HostConfigInvalid { path: PathBuf, message: String },

    // Options loading errors
    #[error("style guide config not found")]
    NotFound,

    #[error("invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    // Schema validation errors (no filesystem checks)
    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // Filesystem validation errors (for CLI use)
    #[error("project root not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("required module not found: {path}")]
    RequireNotFound { path: PathBuf },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
