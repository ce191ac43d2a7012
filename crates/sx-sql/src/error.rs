//! Error types for sx-sql

use thiserror::Error;

/// SQL generation and checking errors
#[derive(Error, Debug)]
pub enum SqlError {
    /// SQL parse error (S001)
    #[error("[S001] SQL parse error at line {line}, column {column}: {message}")]
    ParseError {
        message: String,
        line: usize,
        column: usize,
    },

    /// Empty SQL (S002)
    #[error("[S002] SQL is empty")]
    EmptySql,

    /// Statement kind the exporter never produces (S003)
    #[error("[S003] Unsupported SQL statement type: {0}")]
    UnsupportedStatement(String),

    /// Value tuple does not match the table's column list (S004)
    #[error("[S004] Row for table '{table}' has {found} values, expected {expected}")]
    ArityMismatch {
        table: String,
        expected: usize,
        found: usize,
    },
}

/// Result type alias for SqlError
pub type SqlResult<T> = Result<T, SqlError>;
