//! Structured error types for rosterctl-core.
//!
//! The binary wraps these in `anyhow` where convenient; inside the library
//! every fallible path returns `RosterError`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Longest slice of an error response body kept in `RosterError::Status`
pub const MAX_ERROR_BODY: usize = 500;

/// Main error type for rosterctl-core operations
#[derive(Error, Debug)]
pub enum RosterError {
    /// The request never produced a response (DNS, connect, TLS, timeout)
    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-2xx status
    #[error("{url} returned {status}: {body}")]
    Status { url: String, status: u16, body: String },

    /// The body was not a JSON array of members
    #[error("Failed to decode members from {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reading a local file failed
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for rosterctl-core operations
pub type Result<T> = std::result::Result<T, RosterError>;

impl RosterError {
    /// Create an HTTP transport error
    pub fn http(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            url: url.into(),
            source,
        }
    }

    /// Create a status error, truncating the body so logs stay readable
    pub fn status(url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        let mut body = body.into();
        if body.len() > MAX_ERROR_BODY {
            let mut cut = MAX_ERROR_BODY;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
            body.push_str("...");
        }
        Self::Status {
            url: url.into(),
            status,
            body,
        }
    }

    /// Create a decode error with context
    pub fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            context: context.into(),
            source,
        }
    }

    /// Create an I/O error for a path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
