//! Error types for Card Hub

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the fallible edges of the hub (files on disk).
///
/// Interaction handlers never fail: a missing element or an out-of-range
/// index is skipped, not reported.
#[derive(Error, Debug)]
pub enum HubError {
    /// A config or catalog file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config or catalog file is not valid JSON for its schema
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Catalog content is structurally unusable
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// General I/O error (log directory, log files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The global tracing subscriber could not be installed
    #[error("Logging init error: {0}")]
    LoggingInit(String),

    /// Serialization error while writing structured logs
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using HubError
pub type HubResult<T> = Result<T, HubError>;
