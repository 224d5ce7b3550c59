//! Error types for s3policy-core
//!
//! Errors fall into two kinds: configuration errors, raised while resolving a
//! profile, and operation errors, raised while executing a command.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for s3policy-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for s3policy operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested profile section does not exist
    #[error("Configuration error: profile '{0}' not found")]
    ProfileNotFound(String),

    /// Profile section lacks a required key
    #[error("Configuration error: required key '{key}' is not defined in profile '{profile}'")]
    MissingKey { profile: String, key: &'static str },

    /// Local policy file does not exist
    #[error("Policy file doesn't exist: {}", .0.display())]
    PolicyFileNotFound(PathBuf),

    /// Policy file is not a JSON object
    #[error("Policy parsing error: {0}")]
    InvalidPolicy(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Authentication or permission failure
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Bucket or bucket sub-resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflicting bucket state
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Remote call failed
    #[error("Network error: {0}")]
    Network(String),

    /// Bucket never reached the expected state
    #[error("Timed out: {0}")]
    WaitTimeout(String),

    /// General error
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Whether this error was raised while resolving configuration
    pub const fn is_config(&self) -> bool {
        matches!(
            self,
            Error::Config(_) | Error::ProfileNotFound(_) | Error::MissingKey { .. }
        )
    }
}
