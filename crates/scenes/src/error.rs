//! Errors raised at the export boundary.

use coloring_core::ValidationError;
use thiserror::Error;

/// Failure to turn a composed scene into a file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The scene or export settings were rejected before any I/O happened.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Encoding or writing the image failed.
    #[error("export failed: {0}")]
    Io(String),
}
