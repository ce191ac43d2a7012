//! Error types for sx-core

use thiserror::Error;

/// Core error type for syntool-export
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: A listed metadata file does not exist
    #[error("[E001] The following file cannot be found: {path}")]
    MissingInputFile { path: String },

    /// E002: IO error with file path context
    #[error("[E002] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E003: Metadata document is not valid JSON or lacks a required field
    #[error("[E003] Invalid metadata in '{path}': {source}")]
    MetadataParse {
        path: String,
        source: serde_json::Error,
    },

    /// E004: First record has no product identifier and none was supplied
    #[error("[E004] No product identifier for dataset '{dataset}': add 'syntool_id' or pass --product-id")]
    MissingProductId { dataset: String },

    /// E005: Invalid option value
    #[error("[E005] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E006: Fixing a degenerate time range would overflow the calendar
    #[error("[E006] Cannot extend end_datetime of dataset '{dataset}'")]
    DatetimeOverflow { dataset: String },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
