//! MySQL literal rendering
//!
//! Every value embedded in generated SQL is rendered here; escaping lives in
//! [`sx_core::sql_utils`].

use chrono::NaiveDateTime;
use std::borrow::Cow;
use std::fmt;
use sx_core::sql_utils::quote_string;
use sx_core::TIME_FMT;

/// Constructor used to turn WKT into a geometry value.
pub const GEOMETRY_CONSTRUCTOR: &str = "ST_GeomFromText";

/// A typed value ready to be rendered as a SQL literal
#[derive(Debug, Clone, PartialEq)]
pub enum SqlLiteral<'a> {
    /// `NULL`
    Null,
    /// Bare digits
    Integer(i64),
    /// Quoted, escaped string
    Text(Cow<'a, str>),
    /// Quoted `YYYY-MM-DD HH:MM:SS`
    DateTime(NaiveDateTime),
    /// WKT passed to the geometry constructor, or `NULL`
    Geometry(Option<Cow<'a, str>>),
}

impl<'a> SqlLiteral<'a> {
    /// Borrowed text literal.
    pub fn text(value: &'a str) -> Self {
        SqlLiteral::Text(Cow::Borrowed(value))
    }

    /// Geometry literal from optional WKT.
    pub fn geometry(wkt: Option<&'a str>) -> Self {
        SqlLiteral::Geometry(wkt.map(Cow::Borrowed))
    }

    /// Render the literal as SQL text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SqlLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlLiteral::Null | SqlLiteral::Geometry(None) => f.write_str("NULL"),
            SqlLiteral::Integer(n) => write!(f, "{n}"),
            SqlLiteral::Text(s) => f.write_str(&quote_string(s)),
            SqlLiteral::DateTime(dt) => write!(f, "'{}'", dt.format(TIME_FMT)),
            SqlLiteral::Geometry(Some(wkt)) => {
                write!(f, "{GEOMETRY_CONSTRUCTOR}({})", quote_string(wkt))
            }
        }
    }
}

/// Render literals as a parenthesized value tuple: `(a, b, c)`.
pub fn tuple_sql(values: &[SqlLiteral<'_>]) -> String {
    let rendered: Vec<String> = values.iter().map(SqlLiteral::render).collect();
    format!("({})", rendered.join(", "))
}

#[cfg(test)]
#[path = "literal_test.rs"]
mod tests;
