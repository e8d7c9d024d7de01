//! Error types and handling infrastructure for siren-lookup.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types. The binary wraps these in `anyhow` at the edge.
//!
//! ## Design Principles
//!
//! - **Absorbed at the view**: Errors never reach the screen as anything more than a
//!   generic message; the detail here is for logs
//! - **Context preservation**: Include the status code or backend reason when known
//! - **Consistency**: Standardized Result type across all modules

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for siren-lookup operations.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Transport level failure (connection refused, timeout, TLS, ...)
    #[error("HTTP request failed: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status
    #[error("Backend returned status {status}{}", format_reason(.reason))]
    Status { status: u16, reason: Option<String> },

    /// A success response whose body could not be decoded
    #[error("Malformed response body: {message}")]
    Decode { message: String },

    /// Runtime configuration document problems
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Local settings file could not be read or parsed
    #[error("Settings error in {path}: {message}")]
    Settings { path: PathBuf, message: String },

    /// IO errors outside of HTTP (terminal, settings file)
    #[error("IO operation failed: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The request worker has shut down and can no longer accept commands
    #[error("Request worker unavailable")]
    WorkerUnavailable,
}

fn format_reason(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map(|r| format!(": {r}"))
        .unwrap_or_default()
}

/// Standard Result type for siren-lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;

impl LookupError {
    /// Create a Status error, keeping the backend's `{"error": ...}` reason if any
    pub fn status(status: u16, reason: Option<String>) -> Self {
        Self::Status { status, reason }
    }

    /// Create a Decode error with a descriptive message
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a Config error with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a Settings error for the given file
    pub fn settings(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Settings {
            path: path.into(),
            message: message.into(),
        }
    }

    /// HTTP status code carried by this error, if the backend answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LookupError {
    fn from(err: std::io::Error) -> Self {
        let message = match err.kind() {
            std::io::ErrorKind::NotFound => "File not found",
            std::io::ErrorKind::PermissionDenied => "Permission denied",
            _ => "IO operation failed",
        };
        Self::Io {
            message: message.to_string(),
            source: err,
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            "could not connect".to_string()
        } else if err.is_decode() {
            "could not read response body".to_string()
        } else {
            err.to_string()
        };
        Self::Http {
            message,
            source: err,
        }
    }
}
