//! Error types for ggms
//!
//! Every failure in a run is fatal: errors are returned straight up the call
//! chain and the binary prints them and exits non-zero.

use thiserror::Error;

/// The main error type for ggms
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Config file already exists: {path}")]
    ConfigExists { path: String },

    #[error("Failed to parse config file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    // ============================================================================
    // Store Errors
    // ============================================================================
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("No document found for {field} = {value}")]
    DocumentVanished { field: String, value: String },

    // ============================================================================
    // Rendering Errors
    // ============================================================================
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an error for a key value whose document disappeared mid-scan
    pub fn vanished(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::DocumentVanished {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Whether this error came from configuration rather than the store
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::Config { .. }
                | Error::MissingConfigField { .. }
                | Error::InvalidConfigValue { .. }
                | Error::ConfigExists { .. }
                | Error::EnvFile(_)
        )
    }
}

/// Result type alias for ggms
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
