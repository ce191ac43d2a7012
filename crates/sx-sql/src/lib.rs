//! sx-sql - SQL generation layer for syntool-export
//!
//! This crate renders MySQL literals, describes the products and
//! per-product dataset tables, turns metadata records into value tuples and
//! checks generated statements with sqlparser-rs.

pub mod error;
pub mod literal;
pub mod row;
pub mod schema;
pub mod validator;

pub use error::{SqlError, SqlResult};
pub use literal::SqlLiteral;
pub use row::{row_tuple, DatasetRow};
pub use schema::{
    dataset_table, product_upsert, products_table, products_table_ddl, ColumnDef, ColumnType,
    TableSchema,
};
pub use validator::StatementValidator;
