//! Unified error types for vol
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed command-line token
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Error from the scripting bridge
    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from domain type validation
    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    /// IO error (writing output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The positional argument could not be interpreted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid volume argument: '{0}'")]
pub struct UsageError(pub String);

/// Errors from the external scripting bridge
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The bridge program could not be started
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The bridge program exited with a non-zero status
    #[error("'{program}' exited with {status}: {stderr}")]
    Exited {
        program: String,
        status: String,
        stderr: String,
    },

    /// The query output did not start with an integer
    #[error("Could not parse volume from output: {0:?}")]
    Parse(String),
}

impl BridgeError {
    /// True if the bridge program itself is missing
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BridgeError::Spawn { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Errors from domain type validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid volume value (must be 0-100)
    #[error("Invalid volume: {0}% (must be 0-100)")]
    InvalidVolume(u8),

    /// Invalid step value (must be 1-100)
    #[error("Invalid step: {0} (must be 1-100)")]
    InvalidStep(u8),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
