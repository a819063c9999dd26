//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: validation error (unknown theme/template, bad geometry, bad dpi, bad options)
//! - 11: I/O error (PNG or sidecar write, reading a recipe file)
//! - 12: input error (malformed JSON in `--options` or a recipe file, bad page name)
//! - 13: serialization error
//! - 14: batch finished but at least one page failed

use coloring_core::ValidationError;
use coloring_scenes::ExportError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// Rejected scene input (unknown theme, degenerate geometry, bad options).
    Validation(ValidationError),
    /// An I/O error (file write, recipe read, export).
    Io(String),
    /// A user input error that is not about scene content (bad JSON text).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
    /// `render-all` completed with `failed` of `total` pages failing.
    Batch { failed: usize, total: usize },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Validation(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
            CliError::Batch { .. } => 14,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Validation(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
            CliError::Batch { failed, total } => {
                write!(f, "{failed} of {total} pages failed to render")
            }
        }
    }
}

impl From<ValidationError> for CliError {
    fn from(e: ValidationError) -> Self {
        CliError::Validation(e)
    }
}

impl From<ExportError> for CliError {
    fn from(e: ExportError) -> Self {
        match e {
            ExportError::Validation(v) => CliError::Validation(v),
            ExportError::Io(msg) => CliError::Io(msg),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
