//! Error types for sx-export

use sx_core::CoreError;
use sx_sql::SqlError;
use thiserror::Error;

/// Export run errors
#[derive(Error, Debug)]
pub enum ExportError {
    /// Record loading or option error
    #[error(transparent)]
    Core(#[from] CoreError),

    /// SQL generation or check error
    #[error(transparent)]
    Sql(#[from] SqlError),

    /// Output could not be written (X001)
    #[error("[X001] Failed to write to {destination}: {source}")]
    Write {
        destination: String,
        source: std::io::Error,
    },
}

impl ExportError {
    /// Path of the missing input file, if that is what stopped the run.
    pub fn missing_input(&self) -> Option<&str> {
        match self {
            ExportError::Core(CoreError::MissingInputFile { path }) => Some(path),
            _ => None,
        }
    }
}

/// Result type alias for ExportError
pub type ExportResult<T> = Result<T, ExportError>;
