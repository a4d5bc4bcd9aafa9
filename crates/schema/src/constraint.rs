//! Constraint descriptors: compound keys, foreign keys, checks
//!
//! These are the normalized inputs to the constraint builder. Foreign-key
//! activation is deliberately a method and not a stored field: it is
//! derived from the member columns and the two table flags, and must be
//! recomputed on every render to avoid staleness.

use ddlsmith_core::{Activatable, ActivationState, aggregate_activation};
use serde::{Deserialize, Serialize};

// ============================================================================
// KeyColumn
// ============================================================================

/// A member column of a compound key or foreign-key constraint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyColumn {
    /// Column name
    pub name: String,

    /// Whether the column is active
    pub is_activated: bool,
}

impl KeyColumn {
    /// Create an active key column
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_activated: true,
        }
    }

    /// Create a deactivated key column
    pub fn deactivated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_activated: false,
        }
    }
}

impl Activatable for KeyColumn {
    fn is_activated(&self) -> bool {
        self.is_activated
    }
}

// ============================================================================
// KeyConstraint
// ============================================================================

/// Kind of a compound key constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyConstraintKind {
    PrimaryKey,
    Unique,
}

impl KeyConstraintKind {
    /// The SQL keyword for this constraint kind
    pub fn as_sql(&self) -> &'static str {
        match self {
            KeyConstraintKind::PrimaryKey => "PRIMARY KEY",
            KeyConstraintKind::Unique => "UNIQUE",
        }
    }
}

/// A compound PRIMARY KEY or UNIQUE constraint.
///
/// The constraint's overall activation is derived from its member
/// columns: all inactive means the whole constraint is commented out,
/// mixed means it is emitted with an active-only column projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyConstraint {
    /// Optional constraint name (`CONSTRAINT "name" …`)
    pub name: Option<String>,

    /// Constraint kind
    pub kind: KeyConstraintKind,

    /// Ordered member columns
    pub columns: Vec<KeyColumn>,
}

impl KeyConstraint {
    /// Create a new compound constraint
    pub fn new(kind: KeyConstraintKind, columns: Vec<KeyColumn>) -> Self {
        Self {
            name: None,
            kind,
            columns,
        }
    }

    /// Set the constraint name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Aggregate activation state of the member columns
    pub fn activation(&self) -> ActivationState {
        aggregate_activation(&self.columns)
    }
}

// ============================================================================
// ForeignKeyDescriptor
// ============================================================================

/// A foreign-key relation between two tables.
///
/// `primary_*` refers to the referenced side, `foreign_*` to the
/// referencing side. The table-activation flags come from the authoring
/// layer; when the source document omits them they hydrate to `true`
/// (fail open), so a constraint is only suppressed when something was
/// explicitly deactivated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForeignKeyDescriptor {
    /// Optional constraint name
    pub name: Option<String>,

    /// Referencing table name
    pub foreign_table: String,

    /// Referencing columns, in order
    pub foreign_columns: Vec<KeyColumn>,

    /// Referenced table name
    pub primary_table: String,

    /// Referenced columns, in order
    pub primary_columns: Vec<KeyColumn>,

    /// Whether the referenced table is active
    pub primary_table_activated: bool,

    /// Whether the referencing table is active
    pub foreign_table_activated: bool,

    /// Schema of the referenced table; wins over the database default
    pub primary_schema_name: Option<String>,

    /// Schema of the referencing table; wins over the database default
    pub foreign_schema_name: Option<String>,
}

impl ForeignKeyDescriptor {
    /// Recompute the derived activation of this foreign key.
    ///
    /// Active only when both tables are active and neither column list is
    /// fully deactivated. Never stored; callers must call this on every
    /// render.
    pub fn is_activated(&self) -> bool {
        let all_primary_off =
            aggregate_activation(&self.primary_columns) == ActivationState::Inactive;
        let all_foreign_off =
            aggregate_activation(&self.foreign_columns) == ActivationState::Inactive;

        self.primary_table_activated
            && self.foreign_table_activated
            && !all_primary_off
            && !all_foreign_off
    }
}

// ============================================================================
// CheckConstraint
// ============================================================================

/// A CHECK constraint with a pre-formed expression.
///
/// The expression text arrives already formatted; the builder only
/// strips one redundant enclosing parenthesis pair if present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConstraint {
    /// Optional constraint name
    pub name: Option<String>,

    /// Boolean expression text
    pub expression: String,

    /// Whether the constraint carries ` NO INHERIT`
    pub no_inherit: bool,
}

impl CheckConstraint {
    /// Create an unnamed check constraint
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            name: None,
            expression: expression.into(),
            no_inherit: false,
        }
    }

    /// Set the constraint name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Mark the constraint NO INHERIT
    pub fn no_inherit(mut self) -> Self {
        self.no_inherit = true;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
