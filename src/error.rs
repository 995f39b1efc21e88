//! Error types for the now.sh client
//!
//! Uses `thiserror` for library errors. Transport failures and local
//! "no match" lookups are distinct variants so callers can branch on them.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for client operations
pub type NowResult<T> = Result<T, NowError>;

/// What kind of remote object a lookup was searching for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Deployment,
    File,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Deployment => write!(f, "deployment"),
            ResourceKind::File => write!(f, "file"),
        }
    }
}

/// Main error type for client operations
#[derive(Error, Debug)]
pub enum NowError {
    /// The API answered with a non-2xx status
    #[error("{method} {path} failed with HTTP {status}: {message}")]
    Transport {
        status: u16,
        method: String,
        path: String,
        message: String,
    },

    /// Connection failure, TLS failure or timeout
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A listing succeeded but nothing in it matched the key
    #[error("{}", not_found_message(*kind, key))]
    NotFound { kind: ResourceKind, key: String },

    /// The remote payload is missing a required field or has the wrong shape
    #[error("invalid {what} payload: {message}")]
    InvalidPayload { what: &'static str, message: String },

    /// Input that would silently drop data
    #[error("ambiguous input: {message}")]
    AmbiguousInput { message: String },

    /// No token in the environment and none on standard input
    #[error("no API token: set {var} or provide it on standard input")]
    MissingToken { var: String },

    /// Interactive token prompt failed
    #[error("token prompt failed: {0}")]
    Prompt(String),

    /// Packaging root does not exist or is not a directory
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// File map keys must be UTF-8
    #[error("path is not valid UTF-8: {path}")]
    NonUtf8Path { path: PathBuf },

    /// File system error while packaging
    #[error("file system error: {0}")]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn not_found_message(kind: ResourceKind, key: &str) -> String {
    match kind {
        ResourceKind::Deployment => format!("no deployment with id '{}'", key),
        ResourceKind::File => format!("no such id or filename: {}", key),
    }
}

impl NowError {
    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            NowError::Transport { status, .. } => Some(*status),
            NowError::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True only for the local "listing had no match" condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, NowError::NotFound { .. })
    }

    pub(crate) fn not_found(kind: ResourceKind, key: impl Into<String>) -> Self {
        NowError::NotFound {
            kind,
            key: key.into(),
        }
    }

    pub(crate) fn invalid_payload(what: &'static str, err: impl fmt::Display) -> Self {
        NowError::InvalidPayload {
            what,
            message: err.to_string(),
        }
    }
}
