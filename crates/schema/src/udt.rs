//! User-defined types
//!
//! Composite types reuse the column machinery for their attribute list;
//! enum and range types carry their own payloads.

use serde::{Deserialize, Serialize};

use crate::column::ColumnDefinition;

// ============================================================================
// UserDefinedType
// ============================================================================

/// Body kind of a user-defined type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum UdtKind {
    /// `CREATE TYPE … AS (attribute list)`
    Composite,
    /// `CREATE TYPE … AS ENUM ('a', 'b')`
    Enum { values: Vec<String> },
    /// `CREATE TYPE … AS RANGE (SUBTYPE = …)`
    Range { subtype: String },
}

/// A user-defined type owned by a schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDefinedType {
    /// Type name
    pub name: String,

    /// Owning schema, used for qualification
    pub database_name: String,

    /// Body kind
    pub kind: UdtKind,

    /// Attribute list for composite types (ignored for enum/range)
    pub properties: Vec<ColumnDefinition>,
}

impl UserDefinedType {
    /// Create a composite type with the given attributes
    pub fn composite(
        name: impl Into<String>,
        database_name: impl Into<String>,
        properties: Vec<ColumnDefinition>,
    ) -> Self {
        Self {
            name: name.into(),
            database_name: database_name.into(),
            kind: UdtKind::Composite,
            properties,
        }
    }

    /// Create an enum type with the given labels
    pub fn enumeration(
        name: impl Into<String>,
        database_name: impl Into<String>,
        values: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            database_name: database_name.into(),
            kind: UdtKind::Enum { values },
            properties: Vec::new(),
        }
    }

    /// Create a range type over the given subtype
    pub fn range(
        name: impl Into<String>,
        database_name: impl Into<String>,
        subtype: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            database_name: database_name.into(),
            kind: UdtKind::Range {
                subtype: subtype.into(),
            },
            properties: Vec::new(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
