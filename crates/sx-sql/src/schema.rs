//! Table schemas and bootstrap statements
//!
//! The products table is shared by every run; each product gets its own
//! dataset table whose shape is fixed and whose name derives from the
//! product identifier.

use crate::literal::{tuple_sql, SqlLiteral};
use std::fmt;
use sx_core::sql_utils::quote_ident_if_needed;
use sx_core::{ProductId, TableName};

/// Column types used by the exporter's tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Varchar(u16),
    DateTime,
    Integer,
    Text,
    Geometry,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Varchar(len) => write!(f, "VARCHAR({len})"),
            ColumnType::DateTime => f.write_str("DATETIME"),
            ColumnType::Integer => f.write_str("INTEGER"),
            ColumnType::Text => f.write_str("TEXT"),
            ColumnType::Geometry => f.write_str("GEOMETRY"),
        }
    }
}

/// One column of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub nullable: bool,
}

const fn column(name: &'static str, column_type: ColumnType) -> ColumnDef {
    ColumnDef {
        name,
        column_type,
        nullable: false,
    }
}

const fn nullable(name: &'static str, column_type: ColumnType) -> ColumnDef {
    ColumnDef {
        name,
        column_type,
        nullable: true,
    }
}

/// Columns of the shared `products` table.
pub static PRODUCT_COLUMNS: &[ColumnDef] = &[
    column("product_id", ColumnType::Varchar(255)),
    column("shortname", ColumnType::Varchar(255)),
    column("type", ColumnType::Varchar(255)),
];

/// Columns of a per-product dataset table, in row tuple order.
pub static DATASET_COLUMNS: &[ColumnDef] = &[
    column("dataset_name", ColumnType::Varchar(255)),
    column("relative_path", ColumnType::Varchar(255)),
    column("begin_datetime", ColumnType::DateTime),
    column("end_datetime", ColumnType::DateTime),
    column("min_zoom_level", ColumnType::Integer),
    column("max_zoom_level", ColumnType::Integer),
    column("resolutions", ColumnType::Text),
    column("bbox_text", ColumnType::Text),
    nullable("bbox_geometry", ColumnType::Geometry),
    column("shape_text", ColumnType::Text),
    column("shape_geometry", ColumnType::Geometry),
];

/// A table: its name, its ordered columns and the single-column primary key.
///
/// The primary key is always the first column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    name: TableName,
    columns: &'static [ColumnDef],
}

impl TableSchema {
    /// Table name, unquoted.
    pub fn name(&self) -> &TableName {
        &self.name
    }

    /// Columns in declaration order.
    pub fn columns(&self) -> &'static [ColumnDef] {
        self.columns
    }

    /// Primary key column.
    pub fn primary_key(&self) -> &'static str {
        self.columns[0].name
    }

    /// Table name as it appears in SQL text.
    pub fn sql_name(&self) -> String {
        quote_ident_if_needed(self.name.as_str())
    }

    /// `CREATE TABLE IF NOT EXISTS` statement, terminated by `;\n`.
    pub fn create_table_sql(&self) -> String {
        let mut lines: Vec<String> = self
            .columns
            .iter()
            .map(|c| {
                let null = if c.nullable { "" } else { " NOT NULL" };
                format!("\t{} {}{}", c.name, c.column_type, null)
            })
            .collect();
        lines.push(format!("\tPRIMARY KEY ({})", self.primary_key()));
        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n{}\n);\n",
            self.sql_name(),
            lines.join(",\n")
        )
    }

    /// `INSERT INTO <table> (<columns>) VALUES ` with a trailing space.
    pub fn insert_header(&self) -> String {
        let names: Vec<&str> = self.columns.iter().map(|c| c.name).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ",
            self.sql_name(),
            names.join(",")
        )
    }

    /// ` ON DUPLICATE KEY UPDATE c=VALUES(c),...;` over every non-key column.
    pub fn upsert_trailer(&self) -> String {
        let updates: Vec<String> = self.columns[1..]
            .iter()
            .map(|c| format!("{0}=VALUES({0})", c.name))
            .collect();
        format!(" ON DUPLICATE KEY UPDATE {};", updates.join(","))
    }
}

/// Schema of the shared `products` table.
pub fn products_table() -> TableSchema {
    TableSchema {
        name: TableName::products(),
        columns: PRODUCT_COLUMNS,
    }
}

/// Schema of the dataset table for `product_id`.
pub fn dataset_table(product_id: &ProductId) -> TableSchema {
    TableSchema {
        name: product_id.table_name(),
        columns: DATASET_COLUMNS,
    }
}

/// DDL for the shared `products` table.
pub fn products_table_ddl() -> String {
    products_table().create_table_sql()
}

/// Products DDL followed by the upsert of one product row.
///
/// `shortname` mirrors the product identifier.
pub fn product_upsert(product_id: &ProductId, product_type: &str) -> String {
    let table = products_table();
    let values = [
        SqlLiteral::text(product_id.as_str()),
        SqlLiteral::text(product_id.as_str()),
        SqlLiteral::text(product_type),
    ];
    format!(
        "{}{}{}{}\n",
        table.create_table_sql(),
        table.insert_header(),
        tuple_sql(&values),
        table.upsert_trailer()
    )
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
