//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main cloakform error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error kinds and provides context for error handling.
#[derive(Debug, Error)]
pub enum CloakformError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Sanitization engine errors
    #[error("Sanitization error: {0}")]
    Sanitization(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Audit trail errors
    #[error("Audit error: {0}")]
    Audit(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for CloakformError {
    fn from(err: std::io::Error) -> Self {
        CloakformError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for CloakformError {
    fn from(err: serde_json::Error) -> Self {
        CloakformError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CloakformError {
    fn from(err: toml::de::Error) -> Self {
        CloakformError::Configuration(format!("TOML parse error: {err}"))
    }
}
