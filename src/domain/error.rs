//! Domain error types

use thiserror::Error;

/// Error when parsing a `host` or `host:port` string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostSpecParseError {
    #[error("Invalid host \"{input}\": hostname is empty")]
    EmptyHostname { input: String },

    #[error("Invalid host \"{input}\": port must be an integer between 1 and 65535")]
    InvalidPort { input: String },

    #[error("Invalid host \"{input}\": IPv6 addresses must be written as [address] or [address]:port")]
    InvalidHostname { input: String },
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
