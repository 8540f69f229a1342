//! Errors from loading and saving parameter catalogues.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for results within the core crate.
pub type Result<T> = std::result::Result<T, CatalogueError>;

/// Errors that can occur while reading or writing a catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
