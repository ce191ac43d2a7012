//! Conversion options consumed by the export driver.
//!
//! The CLI owns parsing; this struct is the plain-parameter surface the core
//! works with.

use crate::error::{CoreError, CoreResult};

/// Maximum number of datasets exported with one INSERT, unless overridden.
pub const DEFAULT_CHUNK_SIZE: usize = 3000;

/// Product type used when the first record carries no `output_type`.
pub const DEFAULT_PRODUCT_TYPE: &str = "ZXY";

/// Options controlling a conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Max number of row tuples per INSERT statement
    pub chunk_size: usize,

    /// Replaces the `syntool_id` of the first record when set
    pub product_id: Option<String>,

    /// Only emit the products table DDL
    pub init_only: bool,

    /// Parse every statement before writing it
    pub validate_sql: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            product_id: None,
            init_only: false,
            validate_sql: false,
        }
    }
}

impl ConvertOptions {
    /// Check option values before a run starts.
    pub fn validate(&self) -> CoreResult<()> {
        if self.chunk_size == 0 {
            return Err(CoreError::ConfigInvalid {
                message: "chunk_size must be at least 1".to_string(),
            });
        }
        if matches!(self.product_id.as_deref(), Some(id) if id.trim().is_empty()) {
            return Err(CoreError::ConfigInvalid {
                message: "product_id override must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
