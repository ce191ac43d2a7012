use super::*;

#[test]
fn test_quote_ident_simple() {
    assert_eq!(quote_ident("products"), "`products`");
}

#[test]
fn test_quote_ident_with_embedded_backticks() {
    assert_eq!(quote_ident("a`b"), "`a``b`");
}

#[test]
fn test_quote_ident_keeps_spaces_and_dashes() {
    assert_eq!(quote_ident("product_S1 SAR-x"), "`product_S1 SAR-x`");
}

#[test]
fn test_escape_sql_string() {
    assert_eq!(escape_sql_string("hello"), "hello");
    assert_eq!(escape_sql_string("it's"), "it''s");
    assert_eq!(escape_sql_string(r"C:\data"), r"C:\\data");
}

#[test]
fn test_escape_backslash_before_quote() {
    // A trailing backslash must not escape the closing quote.
    assert_eq!(quote_string(r"x\"), r"'x\\'");
    assert_eq!(quote_string(r"\'"), r"'\\'''");
}

#[test]
fn test_quote_string_empty() {
    assert_eq!(quote_string(""), "''");
}

#[test]
fn test_quote_ident_if_needed_plain_word() {
    assert_eq!(quote_ident_if_needed("products"), "products");
    assert_eq!(quote_ident_if_needed("_x9"), "_x9");
}

#[test]
fn test_quote_ident_if_needed_special_characters() {
    assert_eq!(quote_ident_if_needed("9lives"), "`9lives`");
    assert_eq!(quote_ident_if_needed("a.b"), "`a.b`");
    assert_eq!(quote_ident_if_needed(""), "``");
}
