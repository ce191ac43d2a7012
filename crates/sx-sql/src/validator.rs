//! Statement checks with sqlparser-rs
//!
//! Generated SQL is parsed with the MySQL dialect before it is written, so a
//! rendering bug surfaces as an error instead of a broken SQL file.

use crate::error::{SqlError, SqlResult};
use sqlparser::ast::Statement;
use sqlparser::dialect::MySqlDialect;
use sqlparser::parser::Parser;

/// Parses exporter output and accepts only the statement kinds it emits
#[derive(Debug, Default)]
pub struct StatementValidator {
    dialect: MySqlDialect,
}

impl StatementValidator {
    /// Create a validator for the MySQL dialect
    pub fn new() -> Self {
        Self {
            dialect: MySqlDialect {},
        }
    }

    /// Parse SQL into AST statements
    pub fn parse(&self, sql: &str) -> SqlResult<Vec<Statement>> {
        let sql = sql.trim();
        if sql.is_empty() {
            return Err(SqlError::EmptySql);
        }
        Parser::parse_sql(&self.dialect, sql).map_err(|e| {
            let msg = e.to_string();
            let (line, column) = parse_location_from_error(&msg);
            SqlError::ParseError {
                message: msg,
                line,
                column,
            }
        })
    }

    /// Parse `sql` and check that it only holds `CREATE TABLE` and `INSERT`
    /// statements. Returns the number of statements.
    pub fn validate(&self, sql: &str) -> SqlResult<usize> {
        let statements = self.parse(sql)?;
        for statement in &statements {
            match statement {
                Statement::CreateTable(_) | Statement::Insert(_) => {}
                other => {
                    let text = other.to_string();
                    let kind = text.split_whitespace().next().unwrap_or("?");
                    return Err(SqlError::UnsupportedStatement(kind.to_string()));
                }
            }
        }
        Ok(statements.len())
    }
}

/// Pull "Line: N, Column: M" out of a sqlparser error message.
///
/// `ParserError` carries no structured location, only message text.
fn parse_location_from_error(msg: &str) -> (usize, usize) {
    let number_after = |label: &str| -> Option<usize> {
        let start = msg.find(label)? + label.len();
        let digits: String = msg[start..]
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    };
    match (number_after("Line:"), number_after("Column:")) {
        (Some(line), Some(column)) => (line, column),
        _ => (0, 0),
    }
}

#[cfg(test)]
#[path = "validator_test.rs"]
mod tests;
