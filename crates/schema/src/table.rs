//! Table specifications and table-level options
//!
//! `TableSpec` is the full statement-level input for `CREATE TABLE`;
//! `TableOptions` aggregates the trailing modifiers rendered after the
//! parenthesized element list.

use serde::{Deserialize, Serialize};

use crate::column::ColumnDefinition;
use crate::constraint::{CheckConstraint, ForeignKeyDescriptor, KeyConstraint};

// ============================================================================
// TableOptions
// ============================================================================

/// One storage parameter of the `WITH (…)` clause, order-preserving
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageParameter {
    pub name: String,
    pub value: String,
}

/// Partitioning specification.
///
/// The composite partition key is resolved during hydration from stored
/// key references into an ordered list of column names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partitioning {
    /// Partition method: `RANGE`, `LIST`, or `HASH`
    pub method: String,

    /// Ordered partition key columns
    pub composite_partition_key: Vec<String>,
}

/// Table-level modifiers, each omitted entirely when empty
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableOptions {
    /// Parent table for `INHERITS (…)`
    pub inherits: Option<String>,

    /// Partitioning clause
    pub partitioning: Option<Partitioning>,

    /// Table access method for `USING …`
    pub using_method: Option<String>,

    /// `ON COMMIT` behavior for temporary tables
    pub on_commit: Option<String>,

    /// Storage parameters for `WITH (…)`
    pub storage_parameters: Vec<StorageParameter>,

    /// Tablespace name
    pub tablespace: Option<String>,

    /// Backing `SELECT` statement for `AS …`
    pub select_statement: Option<String>,
}

impl TableOptions {
    /// Whether every option is empty (renders as an empty string)
    pub fn is_empty(&self) -> bool {
        self.inherits.is_none()
            && self.partitioning.is_none()
            && self.using_method.is_none()
            && self.on_commit.is_none()
            && self.storage_parameters.is_empty()
            && self.tablespace.is_none()
            && self.select_statement.is_none()
    }
}

// ============================================================================
// TableSpec
// ============================================================================

/// The full input for one `CREATE TABLE` statement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSpec {
    /// Table name
    pub name: String,

    /// Ordered column definitions
    pub columns: Vec<ColumnDefinition>,

    /// Compound PRIMARY KEY / UNIQUE constraints
    pub key_constraints: Vec<KeyConstraint>,

    /// CHECK constraints
    pub check_constraints: Vec<CheckConstraint>,

    /// Inline foreign-key constraints
    pub foreign_key_constraints: Vec<ForeignKeyDescriptor>,

    /// Table description, emitted as `COMMENT ON TABLE`
    pub description: Option<String>,

    /// Emit `IF NOT EXISTS`
    pub if_not_exist: bool,

    /// `CREATE TEMPORARY TABLE`
    pub temporary: bool,

    /// `CREATE UNLOGGED TABLE` (ignored when `temporary` is set)
    pub unlogged: bool,

    /// Trailing table options
    pub options: TableOptions,
}

impl TableSpec {
    /// Create an empty table spec with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            key_constraints: Vec::new(),
            check_constraints: Vec::new(),
            foreign_key_constraints: Vec::new(),
            description: None,
            if_not_exist: false,
            temporary: false,
            unlogged: false,
            options: TableOptions::default(),
        }
    }

    /// Add a column
    pub fn with_column(mut self, column: ColumnDefinition) -> Self {
        self.columns.push(column);
        self
    }

    /// Add a compound key constraint
    pub fn with_key_constraint(mut self, constraint: KeyConstraint) -> Self {
        self.key_constraints.push(constraint);
        self
    }

    /// Add a check constraint
    pub fn with_check_constraint(mut self, constraint: CheckConstraint) -> Self {
        self.check_constraints.push(constraint);
        self
    }

    /// Emit `IF NOT EXISTS`
    pub fn if_not_exist(mut self) -> Self {
        self.if_not_exist = true;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
