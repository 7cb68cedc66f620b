//! Domain error types

use thiserror::Error;

/// Message used when a remote message carries no notification sub-record
pub const NO_NOTIFICATION_MSG: &str = "Remote message does not contain notification information";

/// Error raised when a caller hands over a message that cannot be rendered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid argument: {reason}")]
pub struct InvalidArgumentError {
    pub reason: &'static str,
}

impl InvalidArgumentError {
    /// The message has no notification sub-record
    pub const fn missing_notification() -> Self {
        Self {
            reason: NO_NOTIFICATION_MSG,
        }
    }
}

/// Error when parsing a color literal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown color: \"{input}\"")]
pub struct ColorParseError {
    pub input: String,
}

/// Error when formatting a localized string template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Missing format argument at position {0}")]
    MissingArgument(usize),

    #[error("Unsupported format conversion '%{0}'")]
    UnsupportedConversion(char),

    #[error("Unterminated format specifier")]
    Unterminated,

    #[error("Invalid width or precision in format specifier")]
    InvalidSpecifier,
}

/// Error when parsing an inbound message payload
#[derive(Debug, Clone, Error)]
#[error("Failed to parse message payload: {0}")]
pub struct MessageParseError(pub String);

/// Error when loading a resource manifest
#[derive(Debug, Clone, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    ReadError(String),

    #[error("Failed to parse manifest: {0}")]
    ParseError(String),

    #[error("Invalid manifest: {0}")]
    Invalid(String),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
