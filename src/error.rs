//! Error types and handling for Marketlens
//!
//! This module defines the error types used throughout the application,
//! providing consistent error handling and reporting. The formatting engine
//! itself never fails (unformattable values degrade to a placeholder);
//! errors here cover configuration and persistence I/O.

use thiserror::Error;

/// Result type alias for Marketlens operations
pub type Result<T> = std::result::Result<T, MarketlensError>;

/// Main error type for Marketlens
#[derive(Debug, Error)]
pub enum MarketlensError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Malformed or unreadable payload documents
    #[error("Payload error: {message}")]
    Payload { message: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// File I/O errors
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Validation errors
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    /// Generic errors with context
    #[error("Error: {message}")]
    Generic { message: String },
}

impl MarketlensError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        MarketlensError::Config {
            message: message.into(),
        }
    }

    /// Create a new payload error
    pub fn payload<S: Into<String>>(message: S) -> Self {
        MarketlensError::Payload {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        MarketlensError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        MarketlensError::Io {
            message: message.into(),
        }
    }

    /// Create a new generic error
    pub fn generic<S: Into<String>>(message: S) -> Self {
        MarketlensError::Generic {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for MarketlensError {
    fn from(err: std::io::Error) -> Self {
        MarketlensError::io(err.to_string())
    }
}

impl From<serde_yaml::Error> for MarketlensError {
    fn from(err: serde_yaml::Error) -> Self {
        MarketlensError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MarketlensError {
    fn from(err: serde_json::Error) -> Self {
        MarketlensError::Serialization {
            message: err.to_string(),
        }
    }
}
