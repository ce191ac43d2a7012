//! sx-core - Core library for syntool-export
//!
//! This crate provides the types shared by the SQL generation and export
//! layers: parsed dataset metadata records, conversion options, strongly
//! typed product/table identifiers and the MySQL quoting helpers.

pub mod config;
pub mod error;
pub mod metadata;
mod newtype_string;
pub mod product_id;
pub(crate) mod serde_helpers;
pub mod sql_utils;

pub use config::{ConvertOptions, DEFAULT_CHUNK_SIZE, DEFAULT_PRODUCT_TYPE};
pub use error::{CoreError, CoreResult};
pub use metadata::{MetadataRecord, XIDL_SUFFIX};
pub use product_id::{ProductId, TableName};
pub use serde_helpers::TIME_FMT;
