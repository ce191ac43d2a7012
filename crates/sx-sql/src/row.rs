//! Dataset row tuples
//!
//! A row is rendered as a bare value tuple; the batch writer supplies the
//! enclosing `INSERT` text.

use crate::error::{SqlError, SqlResult};
use crate::literal::{tuple_sql, SqlLiteral};
use crate::schema::TableSchema;
use chrono::NaiveDateTime;
use std::borrow::Cow;
use sx_core::MetadataRecord;

/// Values of one dataset table row, before rendering
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetRow<'a> {
    pub name: Cow<'a, str>,
    pub begin: NaiveDateTime,
    pub end: NaiveDateTime,
    pub min_zoom: i64,
    pub max_zoom: i64,
    /// Already comma-joined
    pub resolutions: Cow<'a, str>,
    pub bbox_text: &'a str,
    pub shape_text: &'a str,
    /// Geometry WKT; `shape_text` is used when `None`
    pub shape_wkt: Option<&'a str>,
}

impl<'a> DatasetRow<'a> {
    /// Row for `record` under `name`, optionally overriding the geometry.
    pub fn from_record(
        record: &'a MetadataRecord,
        name: impl Into<Cow<'a, str>>,
        shape_wkt: Option<&'a str>,
    ) -> Self {
        Self {
            name: name.into(),
            begin: record.begin_datetime,
            end: record.end_datetime,
            min_zoom: record.min_zoom_level,
            max_zoom: record.max_zoom_level,
            resolutions: Cow::Owned(record.resolutions_text()),
            bbox_text: &record.bbox_str,
            shape_text: &record.shape_str,
            shape_wkt,
        }
    }

    /// Literals in dataset column order.
    pub fn literals(&self) -> Vec<SqlLiteral<'_>> {
        vec![
            SqlLiteral::text(&self.name),
            SqlLiteral::text(""),
            SqlLiteral::DateTime(self.begin),
            SqlLiteral::DateTime(self.end),
            SqlLiteral::Integer(self.min_zoom),
            SqlLiteral::Integer(self.max_zoom),
            SqlLiteral::text(&self.resolutions),
            SqlLiteral::text(self.bbox_text),
            SqlLiteral::geometry(None),
            SqlLiteral::text(self.shape_text),
            SqlLiteral::geometry(Some(self.shape_wkt.unwrap_or(self.shape_text))),
        ]
    }
}

/// Render `row` as a value tuple for `table`.
///
/// Fails when the table's column count does not match the row.
pub fn row_tuple(table: &TableSchema, row: &DatasetRow<'_>) -> SqlResult<String> {
    let values = row.literals();
    if values.len() != table.columns().len() {
        return Err(SqlError::ArityMismatch {
            table: table.name().to_string(),
            expected: table.columns().len(),
            found: values.len(),
        });
    }
    Ok(tuple_sql(&values))
}

#[cfg(test)]
#[path = "row_test.rs"]
mod tests;
