//! Error types for the webhook probe
//!
//! Network failures of every kind (refused connection, DNS failure, timeout)
//! collapse into a single transport taxon; a reachable server answering with
//! a non-200 status is not an error and surfaces through the probe outcome
//! instead.

use thiserror::Error;

/// Main error type for probe operations
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Transport-level failure: connection refused, DNS failure, or timeout
    #[error("Transport error: {0}")]
    Transport(String),

    /// File access or I/O error while loading configuration
    #[error("File error: {0}")]
    File(String),

    /// Configuration parsing error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Malformed target host or port
    #[error("Invalid target: {0}")]
    InvalidTarget(String),
}

impl ProbeError {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        ProbeError::Transport(msg.into())
    }

    /// Create an invalid target error
    pub fn invalid_target(msg: impl Into<String>) -> Self {
        ProbeError::InvalidTarget(msg.into())
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        ProbeError::Transport(err.to_string())
    }
}

impl From<std::io::Error> for ProbeError {
    fn from(err: std::io::Error) -> Self {
        ProbeError::File(err.to_string())
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(err: serde_json::Error) -> Self {
        ProbeError::Parse(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for ProbeError {
    fn from(err: serde_yaml::Error) -> Self {
        ProbeError::Parse(format!("YAML error: {}", err))
    }
}

/// Result type alias for probe operations
pub type Result<T> = std::result::Result<T, ProbeError>;
