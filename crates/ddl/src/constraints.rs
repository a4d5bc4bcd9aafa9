//! Constraint fragment builders
//!
//! Converts key-constraint and foreign-key descriptors into SQL
//! fragments, applying the activation model: fully active constraints
//! render live, fully inactive ones still produce text for the caller
//! to comment out, and partially inactive ones render live with an
//! active-only column projection.

use ddlsmith_core::Activatable;
use ddlsmith_schema::{CheckConstraint, DatabaseSpec, ForeignKeyDescriptor, KeyConstraint};

use crate::activation::{DividedConstraints, check_all_keys_deactivated, comment_if_deactivated};
use crate::naming::{
    active_columns_list, columns_list, full_columns_list, name_prefixed_with_schema,
    wrap_in_quotes,
};

// ============================================================================
// ConstraintStatement
// ============================================================================

/// A rendered constraint fragment and its derived activation
#[derive(Debug, Clone)]
pub struct ConstraintStatement {
    /// The SQL fragment; produced even when deactivated, so the caller
    /// can still emit it as a comment
    pub statement: String,

    /// Whether the fragment renders as live SQL
    pub is_activated: bool,
}

impl Activatable for ConstraintStatement {
    fn is_activated(&self) -> bool {
        self.is_activated
    }
}

// ============================================================================
// Key constraints
// ============================================================================

/// Render a compound PRIMARY KEY / UNIQUE constraint.
///
/// Activation is derived from the member columns: the constraint is
/// active when at least one column is.
pub fn create_key_constraint(
    constraint: &KeyConstraint,
    parent_activated: bool,
) -> ConstraintStatement {
    if constraint.columns.is_empty() {
        tracing::warn!(
            name = constraint.name.as_deref().unwrap_or(""),
            "key constraint has no columns; rendering degenerate text"
        );
    }

    let all_deactivated = check_all_keys_deactivated(&constraint.columns);
    let name_part = constraint
        .name
        .as_deref()
        .map(|name| format!("CONSTRAINT {} ", wrap_in_quotes(name)))
        .unwrap_or_default();
    let columns = columns_list(&constraint.columns, all_deactivated, parent_activated);

    ConstraintStatement {
        statement: format!("{name_part}{}{columns}", constraint.kind.as_sql()),
        is_activated: !all_deactivated,
    }
}

/// Merge divided constraint groups into the table-body suffix string.
///
/// The active group is appended as live SQL; the inactive group is
/// consolidated into a single `/* … */` block. When the parent table is
/// itself deactivated the inactive group is left uncommented, since the
/// host comments out the whole statement.
pub fn generate_constraints_string(
    divided: &DividedConstraints,
    parent_activated: bool,
) -> String {
    let mut out = String::new();

    if !divided.activated.is_empty() {
        out.push_str(",\n\t");
        out.push_str(&divided.activated.join(",\n\t"));
    }

    if !divided.deactivated.is_empty() {
        let block = comment_if_deactivated(
            &divided.deactivated.join(",\n\t"),
            !parent_activated,
            true,
        );
        out.push_str("\n\t");
        out.push_str(&block);
    }

    out
}

// ============================================================================
// Foreign keys
// ============================================================================

fn foreign_key_lists(descriptor: &ForeignKeyDescriptor) -> (bool, String, String) {
    let is_activated = descriptor.is_activated();

    // When the constraint is suppressed, only the active subset is
    // listed: the text stays consistent if the table is later
    // reactivated piecemeal.
    let (foreign, primary) = if is_activated {
        (
            full_columns_list(&descriptor.foreign_columns),
            full_columns_list(&descriptor.primary_columns),
        )
    } else {
        (
            active_columns_list(&descriptor.foreign_columns),
            active_columns_list(&descriptor.primary_columns),
        )
    };

    (is_activated, foreign, primary)
}

fn primary_table_name(descriptor: &ForeignKeyDescriptor, db: &DatabaseSpec) -> String {
    let schema = descriptor
        .primary_schema_name
        .as_deref()
        .unwrap_or(&db.database_name);
    name_prefixed_with_schema(&descriptor.primary_table, schema)
}

/// Render the in-line (table body) form of a foreign-key constraint
pub fn create_foreign_key_constraint(
    descriptor: &ForeignKeyDescriptor,
    db: &DatabaseSpec,
) -> ConstraintStatement {
    let (is_activated, foreign, primary) = foreign_key_lists(descriptor);

    let name_part = descriptor
        .name
        .as_deref()
        .map(|name| format!("CONSTRAINT {} ", wrap_in_quotes(name)))
        .unwrap_or_default();

    let statement = format!(
        "{name_part}FOREIGN KEY ({foreign}) REFERENCES {} ({primary})",
        primary_table_name(descriptor, db),
    );

    ConstraintStatement {
        statement: statement.trim().to_string(),
        is_activated,
    }
}

/// Render the out-of-line `ALTER TABLE … ADD CONSTRAINT` form
pub fn create_foreign_key(
    descriptor: &ForeignKeyDescriptor,
    db: &DatabaseSpec,
) -> ConstraintStatement {
    let (is_activated, foreign, primary) = foreign_key_lists(descriptor);

    let foreign_schema = descriptor
        .foreign_schema_name
        .as_deref()
        .unwrap_or(&db.database_name);
    let foreign_table = name_prefixed_with_schema(&descriptor.foreign_table, foreign_schema);

    let name_part = descriptor
        .name
        .as_deref()
        .map(|name| format!("CONSTRAINT {} ", wrap_in_quotes(name)))
        .unwrap_or_default();

    let statement = format!(
        "ALTER TABLE IF EXISTS {foreign_table} ADD {name_part}FOREIGN KEY ({foreign}) REFERENCES {} ({primary});",
        primary_table_name(descriptor, db),
    );

    ConstraintStatement {
        statement: statement.trim().to_string(),
        is_activated,
    }
}

// ============================================================================
// Check constraints
// ============================================================================

/// Strip one redundant enclosing parenthesis pair, if the outermost
/// pair actually spans the whole expression
fn strip_enclosing_parens(expression: &str) -> &str {
    let trimmed = expression.trim();
    let bytes = trimmed.as_bytes();
    if bytes.first() != Some(&b'(') || bytes.last() != Some(&b')') {
        return trimmed;
    }

    let mut depth = 0usize;
    for (index, byte) in bytes.iter().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                // The opening paren closes before the end: not redundant
                if depth == 0 && index != bytes.len() - 1 {
                    return trimmed;
                }
            }
            _ => {}
        }
    }

    &trimmed[1..trimmed.len() - 1]
}

/// Render a CHECK constraint clause
pub fn create_check_constraint(constraint: &CheckConstraint) -> String {
    let name_part = constraint
        .name
        .as_deref()
        .map(|name| format!("CONSTRAINT {} ", wrap_in_quotes(name)))
        .unwrap_or_default();
    let no_inherit = if constraint.no_inherit { " NO INHERIT" } else { "" };

    format!(
        "{name_part}CHECK ({}){no_inherit}",
        strip_enclosing_parens(&constraint.expression),
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::divide_into_activated_and_deactivated;
    use ddlsmith_schema::{KeyColumn, KeyConstraintKind};

    fn db() -> DatabaseSpec {
        DatabaseSpec::new("shop")
    }

    fn fk() -> ForeignKeyDescriptor {
        ForeignKeyDescriptor {
            name: Some("fk_orders_users".to_string()),
            foreign_table: "orders".to_string(),
            foreign_columns: vec![KeyColumn::new("user_id")],
            primary_table: "users".to_string(),
            primary_columns: vec![KeyColumn::new("id")],
            primary_table_activated: true,
            foreign_table_activated: true,
            primary_schema_name: None,
            foreign_schema_name: None,
        }
    }

    #[test]
    fn test_key_constraint_active() {
        let constraint = KeyConstraint::new(
            KeyConstraintKind::PrimaryKey,
            vec![KeyColumn::new("id"), KeyColumn::new("tenant_id")],
        )
        .named("pk_users");
        let rendered = create_key_constraint(&constraint, true);

        assert!(rendered.is_activated);
        assert_eq!(
            rendered.statement,
            "CONSTRAINT \"pk_users\" PRIMARY KEY (\"id\", \"tenant_id\")"
        );
    }

    #[test]
    fn test_key_constraint_fully_deactivated() {
        let constraint = KeyConstraint::new(
            KeyConstraintKind::Unique,
            vec![KeyColumn::deactivated("email")],
        );
        let rendered = create_key_constraint(&constraint, true);

        assert!(!rendered.is_activated);
        assert_eq!(rendered.statement, "UNIQUE (\"email\")");
    }

    #[test]
    fn test_constraints_string_groups() {
        let constraints = [
            ConstraintStatement {
                statement: "PRIMARY KEY (\"id\")".to_string(),
                is_activated: true,
            },
            ConstraintStatement {
                statement: "UNIQUE (\"email\")".to_string(),
                is_activated: false,
            },
        ];
        let divided =
            divide_into_activated_and_deactivated(&constraints, |c| c.statement.clone());
        let merged = generate_constraints_string(&divided, true);

        assert_eq!(
            merged,
            ",\n\tPRIMARY KEY (\"id\")\n\t/* UNIQUE (\"email\") */"
        );
    }

    #[test]
    fn test_constraints_string_inactive_parent_leaves_block_plain() {
        let constraints = [ConstraintStatement {
            statement: "UNIQUE (\"email\")".to_string(),
            is_activated: false,
        }];
        let divided =
            divide_into_activated_and_deactivated(&constraints, |c| c.statement.clone());
        let merged = generate_constraints_string(&divided, false);

        assert_eq!(merged, "\n\tUNIQUE (\"email\")");
    }

    #[test]
    fn test_foreign_key_constraint_active() {
        let rendered = create_foreign_key_constraint(&fk(), &db());

        assert!(rendered.is_activated);
        assert_eq!(
            rendered.statement,
            "CONSTRAINT \"fk_orders_users\" FOREIGN KEY (\"user_id\") REFERENCES \"shop\".\"users\" (\"id\")"
        );
    }

    #[test]
    fn test_foreign_key_schema_precedence() {
        let mut descriptor = fk();
        descriptor.primary_schema_name = Some("auth".to_string());
        let rendered = create_foreign_key_constraint(&descriptor, &db());

        assert!(rendered.statement.contains("\"auth\".\"users\""));
    }

    #[test]
    fn test_foreign_key_suppressed_lists_active_subset() {
        let mut descriptor = fk();
        descriptor.foreign_columns = vec![
            KeyColumn::new("user_id"),
            KeyColumn::deactivated("tenant_id"),
        ];
        descriptor.primary_columns = vec![
            KeyColumn::new("id"),
            KeyColumn::deactivated("tenant_id"),
        ];
        descriptor.primary_table_activated = false;
        let rendered = create_foreign_key_constraint(&descriptor, &db());

        assert!(!rendered.is_activated);
        assert!(rendered.statement.contains("FOREIGN KEY (\"user_id\")"));
        assert!(!rendered.statement.contains("tenant_id"));
    }

    #[test]
    fn test_alter_table_foreign_key() {
        let rendered = create_foreign_key(&fk(), &db());

        assert!(rendered.statement.starts_with("ALTER TABLE IF EXISTS \"shop\".\"orders\" ADD CONSTRAINT"));
        assert!(rendered.statement.ends_with(";"));
    }

    #[test]
    fn test_check_constraint_strips_redundant_parens() {
        let constraint = CheckConstraint::new("(price > 0)");
        assert_eq!(create_check_constraint(&constraint), "CHECK (price > 0)");
    }

    #[test]
    fn test_check_constraint_keeps_needed_parens() {
        let constraint = CheckConstraint::new("(a > 0) AND (b > 0)");
        assert_eq!(
            create_check_constraint(&constraint),
            "CHECK ((a > 0) AND (b > 0))"
        );
    }

    #[test]
    fn test_check_constraint_unwrapped_expression_unchanged() {
        let constraint = CheckConstraint::new("price > 0");
        assert_eq!(create_check_constraint(&constraint), "CHECK (price > 0)");
    }

    #[test]
    fn test_check_constraint_named_no_inherit() {
        let constraint = CheckConstraint::new("price > 0")
            .named("positive_price")
            .no_inherit();
        assert_eq!(
            create_check_constraint(&constraint),
            "CONSTRAINT \"positive_price\" CHECK (price > 0) NO INHERIT"
        );
    }
}
