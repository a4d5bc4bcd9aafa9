//! Statement assembly
//!
//! Typed builders for the top-level statements. Each builder takes a
//! parts struct whose fields are already-rendered fragments, so a
//! missing part is an empty string and can never surface as a dangling
//! keyword or an unresolved placeholder.

use crate::naming::wrap_in_quotes;

// ============================================================================
// CREATE SCHEMA / COMMENT ON
// ============================================================================

/// Render a `CREATE SCHEMA` statement
pub fn create_schema_statement(name: &str, if_not_exist: bool) -> String {
    let if_not_exist = if if_not_exist { " IF NOT EXISTS" } else { "" };
    format!("CREATE SCHEMA{if_not_exist} {};", wrap_in_quotes(name))
}

/// Render a `COMMENT ON <object kind> <qualified name>` statement.
///
/// `object` is the full object reference, e.g. `SCHEMA "shop"` or
/// `COLUMN "shop"."users"."id"`. The comment text is single-quoted with
/// internal quotes doubled.
pub fn comment_on_statement(object: &str, comment: &str) -> String {
    format!("COMMENT ON {object} IS '{}';", comment.replace('\'', "''"))
}

// ============================================================================
// CREATE TABLE
// ============================================================================

/// Pre-rendered fragments of one `CREATE TABLE` statement
#[derive(Debug, Clone, Default)]
pub struct TableStatementParts {
    /// ` TEMPORARY` / ` UNLOGGED` / empty
    pub temporary: &'static str,

    /// Emit `IF NOT EXISTS`
    pub if_not_exist: bool,

    /// Schema-qualified, quoted table name
    pub name: String,

    /// Column lines, each already decorated and activation-commented
    pub columns: Vec<String>,

    /// Key-constraint suffix from the constraint builder (starts with
    /// its own separator, or empty)
    pub key_constraints: String,

    /// Check-constraint clauses
    pub check_constraints: Vec<String>,

    /// In-line foreign-key suffix (starts with its own separator, or
    /// empty)
    pub foreign_keys: String,

    /// Trailing option clauses (each `\n`-prefixed, or empty)
    pub options: String,
}

/// Assemble a `CREATE TABLE` statement from its rendered parts
pub fn create_table_statement(parts: &TableStatementParts) -> String {
    let if_not_exist = if parts.if_not_exist { " IF NOT EXISTS" } else { "" };

    let checks = if parts.check_constraints.is_empty() {
        String::new()
    } else {
        format!(",\n\t{}", parts.check_constraints.join(",\n\t"))
    };

    format!(
        "CREATE{} TABLE{if_not_exist} {} (\n\t{}{}{checks}{}\n){};",
        parts.temporary,
        parts.name,
        parts.columns.join(",\n\t"),
        parts.key_constraints,
        parts.foreign_keys,
        parts.options,
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_schema() {
        assert_eq!(create_schema_statement("shop", false), "CREATE SCHEMA \"shop\";");
        assert_eq!(
            create_schema_statement("shop", true),
            "CREATE SCHEMA IF NOT EXISTS \"shop\";"
        );
    }

    #[test]
    fn test_comment_on_escapes_quotes() {
        assert_eq!(
            comment_on_statement("SCHEMA \"shop\"", "the shop's schema"),
            "COMMENT ON SCHEMA \"shop\" IS 'the shop''s schema';"
        );
    }

    #[test]
    fn test_minimal_table_statement() {
        let parts = TableStatementParts {
            name: "\"shop\".\"users\"".to_string(),
            columns: vec!["\"id\" bigint NOT NULL".to_string()],
            ..TableStatementParts::default()
        };

        assert_eq!(
            create_table_statement(&parts),
            "CREATE TABLE \"shop\".\"users\" (\n\t\"id\" bigint NOT NULL\n);"
        );
    }

    #[test]
    fn test_full_table_statement() {
        let parts = TableStatementParts {
            temporary: " TEMPORARY",
            if_not_exist: true,
            name: "\"shop\".\"carts\"".to_string(),
            columns: vec![
                "\"id\" bigint NOT NULL".to_string(),
                "\"total\" numeric(10,2)".to_string(),
            ],
            key_constraints: ",\n\tPRIMARY KEY (\"id\")".to_string(),
            check_constraints: vec!["CHECK (total >= 0)".to_string()],
            foreign_keys: String::new(),
            options: "\nON COMMIT DELETE ROWS".to_string(),
        };

        assert_eq!(
            create_table_statement(&parts),
            "CREATE TEMPORARY TABLE IF NOT EXISTS \"shop\".\"carts\" (\n\t\"id\" bigint NOT NULL,\n\t\"total\" numeric(10,2),\n\tPRIMARY KEY (\"id\"),\n\tCHECK (total >= 0)\n)\nON COMMIT DELETE ROWS;"
        );
    }

    #[test]
    fn test_no_dangling_separators_with_empty_parts() {
        let parts = TableStatementParts {
            name: "\"t\"".to_string(),
            columns: vec!["\"a\" integer".to_string()],
            ..TableStatementParts::default()
        };
        let ddl = create_table_statement(&parts);

        assert!(!ddl.contains(",\n)"));
        assert!(!ddl.contains("\t\n"));
    }
}
