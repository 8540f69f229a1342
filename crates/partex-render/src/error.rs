//! Errors from table and macro rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for results within the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rendering LaTeX fragments.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("number of column widths ({widths}) must match number of columns ({columns})")]
    ColumnWidthMismatch { widths: usize, columns: usize },

    #[error("column width #{index} is {value}; widths must be positive and finite")]
    InvalidColumnWidth { index: usize, value: f64 },

    #[error("parameter '{key}' has no '{field}' attribute")]
    MissingField { key: String, field: String },

    #[error("cannot write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// Whether this error stems from an inconsistent table configuration
    /// rather than from the catalogue or the output stream.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            RenderError::ColumnWidthMismatch { .. } | RenderError::InvalidColumnWidth { .. }
        )
    }
}
