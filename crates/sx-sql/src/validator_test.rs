use super::*;

#[test]
fn test_validate_insert_with_upsert() {
    let validator = StatementValidator::new();
    let sql = "INSERT INTO t (a,b) VALUES ('x', 1),('y', 2) \
               ON DUPLICATE KEY UPDATE b=VALUES(b);";
    assert_eq!(validator.validate(sql).unwrap(), 1);
}

#[test]
fn test_validate_multiple_statements() {
    let validator = StatementValidator::new();
    let sql = "CREATE TABLE IF NOT EXISTS t (a INTEGER NOT NULL, PRIMARY KEY (a));\n\
               INSERT INTO t (a) VALUES (1);\n";
    assert_eq!(validator.validate(sql).unwrap(), 2);
}

#[test]
fn test_validate_empty() {
    let validator = StatementValidator::new();
    assert!(matches!(validator.validate("  \n"), Err(SqlError::EmptySql)));
}

#[test]
fn test_validate_rejects_other_statements() {
    let validator = StatementValidator::new();
    let result = validator.validate("DROP TABLE products");
    assert!(matches!(result, Err(SqlError::UnsupportedStatement(_))));
}

#[test]
fn test_validate_reports_parse_error() {
    let validator = StatementValidator::new();
    let result = validator.validate("INSERT INTO t (a) VALUES ('unterminated)");
    assert!(matches!(result, Err(SqlError::ParseError { .. })));
}

#[test]
fn test_parse_location_from_error() {
    assert_eq!(
        parse_location_from_error("Expected: an expression, found: EOF at Line: 3, Column: 14"),
        (3, 14)
    );
    assert_eq!(parse_location_from_error("no location here"), (0, 0));
}
