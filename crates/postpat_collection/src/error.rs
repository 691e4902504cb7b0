//! Error types for collection operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for collection operations.
pub type CollectionResult<T> = Result<T, CollectionError>;

/// Errors that can occur while splitting or joining a collection.
#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("Collection directory not found: {0}")]
    NotFound(PathBuf),

    #[error("Collection directory already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("Invalid collection name {0:?}: must be non-empty and contain no path separators")]
    InvalidName(String),

    #[error("Unable to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to parse {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unable to encode fragment {name}: {source}")]
    Encode {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid fragment search pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
