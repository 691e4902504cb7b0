//! Error types for rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering or joining a collection.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unable to parse template: {0}")]
    Template(String),

    #[error("Unable to execute template: {0}")]
    Render(String),

    #[error("Unable to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to create destination file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Collection(#[from] postpat_collection::CollectionError),
}
