//! MySQL quoting utilities
//!
//! All text that ends up inside generated SQL goes through these helpers so
//! that record fields containing quotes or backslashes cannot break out of
//! their literal.

/// Quote a MySQL identifier with backticks.
///
/// Embedded backticks are doubled.
///
/// # Examples
/// ```
/// use sx_core::sql_utils::quote_ident;
/// assert_eq!(quote_ident("product_sst"), "`product_sst`");
/// assert_eq!(quote_ident("we`ird"), "`we``ird`");
/// ```
pub fn quote_ident(ident: &str) -> String {
    format!("`{}`", ident.replace('`', "``"))
}

/// Quote an identifier only when it is not a plain `[A-Za-z_][A-Za-z0-9_]*`
/// word.
///
/// # Examples
/// ```
/// use sx_core::sql_utils::quote_ident_if_needed;
/// assert_eq!(quote_ident_if_needed("product_sst"), "product_sst");
/// assert_eq!(quote_ident_if_needed("product_S1-SAR"), "`product_S1-SAR`");
/// ```
pub fn quote_ident_if_needed(ident: &str) -> String {
    let mut chars = ident.chars();
    let plain = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if plain {
        ident.to_string()
    } else {
        quote_ident(ident)
    }
}

/// Escape a value for use inside a single-quoted MySQL string literal.
///
/// MySQL treats backslash as an escape character in string literals, so it
/// is doubled along with the single quote.
pub fn escape_sql_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "''")
}

/// Wrap a value in single quotes after escaping it.
///
/// # Examples
/// ```
/// use sx_core::sql_utils::quote_string;
/// assert_eq!(quote_string("it's"), "'it''s'");
/// ```
pub fn quote_string(value: &str) -> String {
    format!("'{}'", escape_sql_string(value))
}

#[cfg(test)]
#[path = "sql_utils_test.rs"]
mod tests;
