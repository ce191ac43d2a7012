//! Product identifiers and the dataset table names derived from them.

use crate::newtype_string::define_newtype_string;

/// Prefix shared by every per-product dataset table.
pub const PRODUCT_TABLE_PREFIX: &str = "product_";

define_newtype_string! {
    /// External identifier of a Syntool product (`syntool_id`).
    ///
    /// May contain spaces; they only matter when deriving the table name.
    pub struct ProductId;
}

define_newtype_string! {
    /// Name of a SQL table, unquoted.
    pub struct TableName;
}

impl ProductId {
    /// Name of the table holding this product's datasets.
    ///
    /// Spaces are replaced with underscores, so `"sst anomaly"` maps to
    /// `product_sst_anomaly`. The mapping is deterministic.
    pub fn table_name(&self) -> TableName {
        TableName(format!(
            "{PRODUCT_TABLE_PREFIX}{}",
            self.0.replace(' ', "_")
        ))
    }
}

impl TableName {
    /// The shared `products` table.
    pub fn products() -> Self {
        Self("products".to_string())
    }
}

#[cfg(test)]
#[path = "product_id_test.rs"]
mod tests;
