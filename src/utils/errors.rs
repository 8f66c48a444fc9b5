//! Error handling for ReloCompass
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the ReloCompass bot
#[derive(Error, Debug)]
pub enum ReloCompassError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Reasons an interaction identifier could not be decoded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallbackParseError {
    #[error("empty interaction identifier")]
    Empty,

    #[error("unknown interaction identifier: {0}")]
    UnknownIdentifier(String),

    #[error("unknown value '{value}' for category '{category}'")]
    UnknownValue { category: String, value: String },
}

/// Result type alias for ReloCompass operations
pub type Result<T> = std::result::Result<T, ReloCompassError>;

impl From<config::ConfigError> for ReloCompassError {
    fn from(err: config::ConfigError) -> Self {
        ReloCompassError::Config(err.to_string())
    }
}

impl ReloCompassError {
    /// How loudly a failed update should be reported
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ReloCompassError::Config(_) => ErrorSeverity::Critical,
            ReloCompassError::InvalidStateTransition { .. } => ErrorSeverity::Info,
            ReloCompassError::InvalidInput(_) => ErrorSeverity::Info,
            ReloCompassError::Telegram(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
