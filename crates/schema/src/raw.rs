//! Raw input shapes produced by the external authoring layer
//!
//! These structs mirror the loosely-shaped document the schema editor
//! exports. Every optional field carries `#[serde(default)]` so an
//! absent field deserializes to empty/absent and hydration fails closed
//! instead of guessing. The two exceptions are the foreign-key
//! table-activation flags, which default to `true`: a missing flag means
//! nothing was explicitly deactivated, and suppressing a constraint on
//! missing data would silently drop it.

use ddlsmith_core::{ColumnId, KeyId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_true() -> bool {
    true
}

// ============================================================================
// Columns
// ============================================================================

/// The column-definition side of a raw column (typed attributes)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawColumnDefinition {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub sql_type: String,

    #[serde(default = "default_true")]
    pub nullable: bool,

    #[serde(default)]
    pub default: Option<String>,

    #[serde(default)]
    pub length: Option<u32>,

    #[serde(default)]
    pub precision: Option<u32>,

    #[serde(default)]
    pub scale: Option<u32>,

    #[serde(default = "default_true")]
    pub is_activated: bool,
}

// Matches the serde defaults, so a hand-built value behaves like a
// deserialized `{}`
impl Default for RawColumnDefinition {
    fn default() -> Self {
        Self {
            name: String::new(),
            sql_type: String::new(),
            nullable: true,
            default: None,
            length: None,
            precision: None,
            scale: None,
            is_activated: true,
        }
    }
}

/// The authoring-schema side of a raw column (editor metadata)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawColumnSchema {
    /// Stable id assigned by the authoring layer; key references
    /// (compound keys, partition keys) point at this
    #[serde(default)]
    pub id: Option<ColumnId>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Inline primary-key flag as authored
    #[serde(default)]
    pub primary_key: bool,

    /// Inline unique flag as authored
    #[serde(default)]
    pub unique: bool,

    #[serde(default = "default_true")]
    pub is_activated: bool,

    #[serde(default)]
    pub collation_rule: Option<String>,

    #[serde(default)]
    pub time_precision: Option<u32>,

    #[serde(default)]
    pub with_timezone: bool,

    #[serde(default)]
    pub interval_options: Option<String>,

    #[serde(rename = "enum", default)]
    pub enum_values: Vec<String>,

    #[serde(default)]
    pub range_subtype: Option<String>,
}

impl Default for RawColumnSchema {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: None,
            primary_key: false,
            unique: false,
            is_activated: true,
            collation_rule: None,
            time_precision: None,
            with_timezone: false,
            interval_options: None,
            enum_values: Vec::new(),
            range_subtype: None,
        }
    }
}

// ============================================================================
// Keys
// ============================================================================

/// A stored reference to a column by its authoring-layer id
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RawKeyRef {
    pub key_id: KeyId,
}

/// A compound primary-key definition on the table schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPrimaryKeySpec {
    #[serde(default)]
    pub constraint_name: Option<String>,

    #[serde(default)]
    pub composite_primary_key: Vec<RawKeyRef>,
}

/// A compound unique-key definition on the table schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawUniqueKeySpec {
    #[serde(default)]
    pub constraint_name: Option<String>,

    #[serde(default)]
    pub composite_unique_key: Vec<RawKeyRef>,
}

/// The json-schema side of a raw table: ordered properties plus the
/// compound key definitions that reference them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTableSchema {
    #[serde(default)]
    pub properties: Vec<RawColumnSchema>,

    #[serde(default)]
    pub primary_key: Vec<RawPrimaryKeySpec>,

    #[serde(default)]
    pub unique_key: Vec<RawUniqueKeySpec>,
}

// ============================================================================
// Constraints
// ============================================================================

/// Raw check constraint as exported by the authoring layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCheckConstraint {
    #[serde(default)]
    pub chk_constr_name: Option<String>,

    #[serde(default)]
    pub constr_expression: String,

    #[serde(default)]
    pub no_inherit: bool,
}

/// A member column of a raw foreign key; a missing activation flag
/// means active (fail open)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawKeyColumn {
    #[serde(default)]
    pub name: String,

    #[serde(default = "default_true")]
    pub is_activated: bool,
}

impl Default for RawKeyColumn {
    fn default() -> Self {
        Self {
            name: String::new(),
            is_activated: true,
        }
    }
}

/// Raw foreign-key relation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawForeignKey {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub foreign_table: String,

    #[serde(default)]
    pub foreign_key: Vec<RawKeyColumn>,

    #[serde(default)]
    pub primary_table: String,

    #[serde(default)]
    pub primary_key: Vec<RawKeyColumn>,

    /// Missing flag hydrates to active (fail open)
    #[serde(default = "default_true")]
    pub primary_table_activated: bool,

    /// Missing flag hydrates to active (fail open)
    #[serde(default = "default_true")]
    pub foreign_table_activated: bool,

    #[serde(default)]
    pub primary_schema_name: Option<String>,

    #[serde(default)]
    pub foreign_schema_name: Option<String>,
}

// ============================================================================
// Tables
// ============================================================================

/// A related schema entry used to resolve inheritance targets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRelatedSchema {
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub collection_name: Option<String>,
}

/// Raw partitioning entry from the details tab
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPartitioning {
    #[serde(default)]
    pub partition_method: Option<String>,

    #[serde(default)]
    pub composite_partition_key: Vec<RawKeyRef>,
}

/// The details tab of a raw table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEntityDetails {
    /// Whether the table renders as live SQL; missing means active
    #[serde(default = "default_true")]
    pub is_activated: bool,

    /// Key into the table's related-schemas map
    #[serde(default)]
    pub inherits: Option<String>,

    #[serde(default)]
    pub partitioning: Vec<RawPartitioning>,

    #[serde(default)]
    pub select_statement: String,

    #[serde(default)]
    pub temporary: bool,

    #[serde(default)]
    pub unlogged: bool,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub if_not_exist: bool,

    #[serde(default)]
    pub using_method: Option<String>,

    #[serde(default)]
    pub on_commit: Option<String>,

    #[serde(default)]
    pub storage_parameter: Vec<crate::table::StorageParameter>,

    #[serde(default)]
    pub table_tablespace_name: Option<String>,
}

// Matches the serde defaults, so a hand-built value behaves like a
// deserialized `{}`
impl Default for RawEntityDetails {
    fn default() -> Self {
        Self {
            is_activated: true,
            inherits: None,
            partitioning: Vec::new(),
            select_statement: String::new(),
            temporary: false,
            unlogged: false,
            description: None,
            if_not_exist: false,
            using_method: None,
            on_commit: None,
            storage_parameter: Vec::new(),
            table_tablespace_name: None,
        }
    }
}

/// Raw table data: name, columns, constraints, related schemas
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTable {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub columns: Vec<RawColumnDefinition>,

    #[serde(default)]
    pub check_constraints: Vec<RawCheckConstraint>,

    #[serde(default)]
    pub foreign_keys: Vec<RawForeignKey>,

    /// Related schemas by stored key, for inheritance resolution
    #[serde(default)]
    pub related_schemas: HashMap<String, RawRelatedSchema>,
}

// ============================================================================
// Containers
// ============================================================================

/// Raw container (schema-level) data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawContainer {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub if_not_exist: bool,

    #[serde(default)]
    pub description: Option<String>,
}

/// Raw user-defined type entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawUdt {
    #[serde(default)]
    pub name: String,

    /// `composite`, `enum`, or `range`
    #[serde(rename = "type", default)]
    pub udt_type: String,

    #[serde(rename = "enum", default)]
    pub enum_values: Vec<String>,

    #[serde(default)]
    pub range_subtype: Option<String>,

    #[serde(default)]
    pub properties: Vec<RawColumnDefinition>,
}

/// One table entry of the exported document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTableEntry {
    #[serde(default)]
    pub table_data: RawTable,

    #[serde(default)]
    pub entity_data: RawEntityDetails,

    #[serde(default)]
    pub json_schema: RawTableSchema,
}

/// The full exported schema document consumed by the CLI
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSchemaDocument {
    #[serde(default)]
    pub container: RawContainer,

    #[serde(default)]
    pub udfs: Vec<crate::database::FunctionSpec>,

    #[serde(default)]
    pub procedures: Vec<crate::database::ProcedureSpec>,

    #[serde(default)]
    pub tables: Vec<RawTableEntry>,

    #[serde(default)]
    pub udts: Vec<RawUdt>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_column_fails_closed() {
        let column: RawColumnDefinition = serde_json::from_str(r#"{"name": "id"}"#).unwrap();
        assert_eq!(column.name, "id");
        assert!(column.nullable);
        assert!(column.is_activated);
        assert!(column.default.is_none());
    }

    #[test]
    fn test_raw_foreign_key_fails_open_on_activation() {
        let fk: RawForeignKey = serde_json::from_str(
            r#"{"primary_table": "users", "foreign_table": "orders"}"#,
        )
        .unwrap();
        assert!(fk.primary_table_activated);
        assert!(fk.foreign_table_activated);
    }

    #[test]
    fn test_raw_document_empty() {
        let doc: RawSchemaDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.tables.is_empty());
        assert_eq!(doc.container.name, "");
    }
}
