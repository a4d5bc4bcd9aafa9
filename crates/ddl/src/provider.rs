//! The top-level DDL provider
//!
//! `DdlProvider` is the public entry point of the engine: one stateless
//! value whose methods turn the normalized schema model into statement
//! text. Every method is a pure transformation; malformed input degrades
//! to best-effort text with a warning rather than an error.

use ddlsmith_schema::{
    CheckConstraint, ColumnDefinition, DatabaseSpec, ForeignKeyDescriptor, TableSpec, UdtKind,
    UserDefinedType,
};

use crate::activation::{comment_if_deactivated, divide_into_activated_and_deactivated};
use crate::catalog;
use crate::catalog::TypeDescriptor;
use crate::constraints::{
    create_check_constraint, create_foreign_key, create_foreign_key_constraint,
    create_key_constraint, generate_constraints_string,
};
use crate::decorate::{decorate_default, decorate_type};
use crate::functions::{functions_script, procedures_script};
use crate::naming::{name_prefixed_with_schema, wrap_in_quotes};
use crate::statement::{TableStatementParts, comment_on_statement, create_schema_statement, create_table_statement};
use crate::table::{table_options, table_temporary_value};
use crate::udt::create_user_defined_type;

// ============================================================================
// DdlProvider
// ============================================================================

/// Stateless DDL synthesis facade
#[derive(Debug, Clone, Copy, Default)]
pub struct DdlProvider;

impl DdlProvider {
    /// Create a provider
    pub fn new() -> Self {
        Self
    }

    // ========================================================================
    // Schema-level statements
    // ========================================================================

    /// Render the `CREATE SCHEMA` group: the schema statement, its
    /// comment, and the function and procedure scripts, blank-line
    /// separated.
    pub fn create_database(&self, db: &DatabaseSpec) -> String {
        if db.database_name.is_empty() {
            tracing::warn!("database spec has no name; rendering degenerate text");
        }

        let mut sections = vec![create_schema_statement(&db.database_name, db.if_not_exist)];

        if let Some(comments) = &db.comments {
            sections.push(comment_on_statement(
                &format!("SCHEMA {}", wrap_in_quotes(&db.database_name)),
                comments,
            ));
        }

        let functions = functions_script(&db.udfs, &db.database_name);
        if !functions.is_empty() {
            sections.push(functions);
        }

        let procedures = procedures_script(&db.procedures, &db.database_name);
        if !procedures.is_empty() {
            sections.push(procedures);
        }

        sections.join("\n\n").trim().to_string()
    }

    // ========================================================================
    // Columns
    // ========================================================================

    /// Render one column (or composite attribute) line.
    ///
    /// Deactivated columns come back prefixed with `-- `; inside a
    /// comma-joined list the line comment swallows the trailing comma
    /// the joiner appends to it.
    pub fn convert_column_definition(&self, column: &ColumnDefinition) -> String {
        let mut decorated = decorate_type(&column.sql_type, column);
        if column.sql_type == "interval" {
            if let Some(options) = &column.interval_options {
                decorated = format!("{decorated} {options}");
            }
        }

        let mut line = format!("{} {decorated}", wrap_in_quotes(&column.name));

        if !column.nullable {
            line.push_str(" NOT NULL");
        }
        if column.primary_key {
            line.push_str(" PRIMARY KEY");
        }
        if column.unique {
            line.push_str(" UNIQUE");
        }
        if let Some(rule) = &column.collation_rule {
            line.push_str(&format!(" COLLATE {}", wrap_in_quotes(rule)));
        }
        if let Some(default) = &column.default {
            line.push_str(&format!(
                " DEFAULT {}",
                decorate_default(&column.sql_type, default)
            ));
        }

        comment_if_deactivated(&line, column.is_activated, false)
    }

    // ========================================================================
    // Tables
    // ========================================================================

    /// Render one `CREATE TABLE` statement, followed by its `COMMENT ON`
    /// statements when present.
    ///
    /// `is_activated` is the table's own activation; when false the whole
    /// statement is commented out and the comment statements are skipped.
    pub fn create_table(&self, table: &TableSpec, db: &DatabaseSpec, is_activated: bool) -> String {
        if table.columns.is_empty() {
            tracing::warn!(table = %table.name, "table has no columns; rendering degenerate text");
        }

        let columns: Vec<String> = table
            .columns
            .iter()
            .map(|column| self.convert_column_definition(column))
            .collect();

        let keys: Vec<_> = table
            .key_constraints
            .iter()
            .map(|constraint| create_key_constraint(constraint, is_activated))
            .collect();
        let key_constraints = generate_constraints_string(
            &divide_into_activated_and_deactivated(&keys, |key| key.statement.clone()),
            is_activated,
        );

        let foreign: Vec<_> = table
            .foreign_key_constraints
            .iter()
            .map(|descriptor| create_foreign_key_constraint(descriptor, db))
            .collect();
        let foreign_keys = generate_constraints_string(
            &divide_into_activated_and_deactivated(&foreign, |fk| fk.statement.clone()),
            is_activated,
        );

        let check_constraints: Vec<String> = table
            .check_constraints
            .iter()
            .map(create_check_constraint)
            .collect();

        let parts = TableStatementParts {
            temporary: table_temporary_value(table.temporary, table.unlogged),
            if_not_exist: table.if_not_exist,
            name: name_prefixed_with_schema(&table.name, &db.database_name),
            columns,
            key_constraints,
            check_constraints,
            foreign_keys,
            options: table_options(&table.options),
        };

        let statement = comment_if_deactivated(&create_table_statement(&parts), is_activated, false);
        if !is_activated {
            return statement;
        }

        let comments = self.table_comments(table, db);
        if comments.is_empty() {
            statement
        } else {
            format!("{statement}\n\n{comments}")
        }
    }

    fn table_comments(&self, table: &TableSpec, db: &DatabaseSpec) -> String {
        let qualified = name_prefixed_with_schema(&table.name, &db.database_name);
        let mut statements = Vec::new();

        if let Some(description) = &table.description {
            statements.push(comment_on_statement(&format!("TABLE {qualified}"), description));
        }

        for column in &table.columns {
            if !column.is_activated {
                continue;
            }
            if let Some(comment) = &column.comment {
                statements.push(comment_on_statement(
                    &format!("COLUMN {qualified}.{}", wrap_in_quotes(&column.name)),
                    comment,
                ));
            }
        }

        statements.join("\n")
    }

    // ========================================================================
    // Constraints
    // ========================================================================

    /// Render a CHECK constraint clause
    pub fn create_check_constraint(&self, constraint: &CheckConstraint) -> String {
        create_check_constraint(constraint)
    }

    /// Render the in-line form of a foreign-key constraint; the result
    /// carries its derived activation
    pub fn create_foreign_key_constraint(
        &self,
        descriptor: &ForeignKeyDescriptor,
        db: &DatabaseSpec,
    ) -> crate::ConstraintStatement {
        create_foreign_key_constraint(descriptor, db)
    }

    /// Render the `ALTER TABLE … ADD CONSTRAINT` form of a foreign key
    pub fn create_foreign_key(
        &self,
        descriptor: &ForeignKeyDescriptor,
        db: &DatabaseSpec,
    ) -> crate::ConstraintStatement {
        create_foreign_key(descriptor, db)
    }

    // ========================================================================
    // User-defined types
    // ========================================================================

    /// Render one `CREATE TYPE` statement.
    ///
    /// Composite attribute lines go through the same column converter as
    /// table columns, activation commenting included.
    pub fn create_udt(&self, udt: &UserDefinedType) -> String {
        let attributes: Vec<String> = match udt.kind {
            UdtKind::Composite => udt
                .properties
                .iter()
                .map(|property| self.convert_column_definition(property))
                .collect(),
            _ => Vec::new(),
        };

        create_user_defined_type(udt, &attributes)
    }

    // ========================================================================
    // Type catalog
    // ========================================================================

    /// All supported type descriptors
    pub fn types_descriptors(&self) -> &'static [TypeDescriptor] {
        catalog::types_descriptors()
    }

    /// Whether the given name is in the type table
    pub fn has_type(&self, name: &str) -> bool {
        catalog::has_type(name)
    }

    /// Concrete dialect type for an abstract authoring-layer class
    pub fn default_type(&self, abstract_type: &str) -> Option<&'static str> {
        catalog::default_type(abstract_type)
    }
}

// ============================================================================
// Tests
// ============================================================================
