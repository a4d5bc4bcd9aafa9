//! Key helper: inline key detection and compound key extraction
//!
//! The authoring layer stores compound keys as lists of opaque key
//! references (column ids). This module resolves those references
//! against the table's ordered properties, decides which key flags are
//! rendered inline on the column, and extracts the table-level
//! constraint descriptors.

use crate::constraint::{KeyColumn, KeyConstraint, KeyConstraintKind};
use crate::raw::{RawColumnSchema, RawKeyRef, RawTableSchema};

// ============================================================================
// Reference resolution
// ============================================================================

/// Resolve stored key references to their columns, in reference order.
///
/// Unknown ids are skipped (fail closed): an absent column cannot be
/// rendered, and dropping it from the projection keeps the surrounding
/// statement valid.
pub fn resolve_key_refs<'a>(
    refs: &[RawKeyRef],
    schema: &'a RawTableSchema,
) -> Vec<&'a RawColumnSchema> {
    refs.iter()
        .filter_map(|key_ref| {
            let found = schema
                .properties
                .iter()
                .find(|property| property.id == Some(key_ref.key_id));
            if found.is_none() {
                tracing::warn!(key_id = %key_ref.key_id, "key reference resolves to no column; skipping");
            }
            found
        })
        .collect()
}

/// Resolve a composite partition key into an ordered column-name list
pub fn resolve_partition_key(refs: &[RawKeyRef], schema: &RawTableSchema) -> Vec<String> {
    resolve_key_refs(refs, schema)
        .into_iter()
        .map(|property| property.name.clone())
        .collect()
}

// ============================================================================
// Inline key detection
// ============================================================================

fn is_member_of_compound_key(column: &RawColumnSchema, schema: &RawTableSchema) -> bool {
    let Some(id) = column.id else {
        return false;
    };

    let in_primary = schema
        .primary_key
        .iter()
        .any(|spec| spec.composite_primary_key.iter().any(|r| r.key_id == id));
    let in_unique = schema
        .unique_key
        .iter()
        .any(|spec| spec.composite_unique_key.iter().any(|r| r.key_id == id));

    in_primary || in_unique
}

/// Whether the column's primary-key flag renders inline on the column
/// line (it does not when the column participates in a compound key,
/// which is rendered as a table-level constraint instead)
pub fn is_inline_primary_key(column: &RawColumnSchema, schema: &RawTableSchema) -> bool {
    column.primary_key && !is_member_of_compound_key(column, schema)
}

/// Whether the column's unique flag renders inline on the column line
pub fn is_inline_unique(column: &RawColumnSchema, schema: &RawTableSchema) -> bool {
    column.unique && !is_member_of_compound_key(column, schema)
}

// ============================================================================
// Compound key extraction
// ============================================================================

/// Extract the table-level PRIMARY KEY / UNIQUE constraints from the
/// stored compound key definitions, preserving definition order.
///
/// Definitions whose references resolve to no columns are dropped; the
/// builders would only render degenerate text for them.
pub fn table_key_constraints(schema: &RawTableSchema) -> Vec<KeyConstraint> {
    let mut constraints = Vec::new();

    for spec in &schema.primary_key {
        let columns = key_columns(&spec.composite_primary_key, schema);
        if columns.is_empty() {
            continue;
        }
        let mut constraint = KeyConstraint::new(KeyConstraintKind::PrimaryKey, columns);
        constraint.name = spec.constraint_name.clone();
        constraints.push(constraint);
    }

    for spec in &schema.unique_key {
        let columns = key_columns(&spec.composite_unique_key, schema);
        if columns.is_empty() {
            continue;
        }
        let mut constraint = KeyConstraint::new(KeyConstraintKind::Unique, columns);
        constraint.name = spec.constraint_name.clone();
        constraints.push(constraint);
    }

    constraints
}

fn key_columns(refs: &[RawKeyRef], schema: &RawTableSchema) -> Vec<KeyColumn> {
    resolve_key_refs(refs, schema)
        .into_iter()
        .map(|property| KeyColumn {
            name: property.name.clone(),
            is_activated: property.is_activated,
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{RawPrimaryKeySpec, RawUniqueKeySpec};
    use ddlsmith_core::ColumnId;

    fn property(id: ColumnId, name: &str, active: bool) -> RawColumnSchema {
        RawColumnSchema {
            id: Some(id),
            name: name.to_string(),
            is_activated: active,
            ..RawColumnSchema::default()
        }
    }

    fn schema_with_compound_pk() -> (RawTableSchema, ColumnId, ColumnId) {
        let id_a = ColumnId::new_v4();
        let id_b = ColumnId::new_v4();

        let schema = RawTableSchema {
            properties: vec![property(id_a, "tenant_id", true), property(id_b, "id", false)],
            primary_key: vec![RawPrimaryKeySpec {
                constraint_name: Some("pk_main".to_string()),
                composite_primary_key: vec![RawKeyRef { key_id: id_a }, RawKeyRef { key_id: id_b }],
            }],
            unique_key: Vec::new(),
        };
        (schema, id_a, id_b)
    }

    #[test]
    fn test_resolve_partition_key_preserves_order() {
        let (schema, id_a, id_b) = schema_with_compound_pk();
        let names = resolve_partition_key(
            &[RawKeyRef { key_id: id_b }, RawKeyRef { key_id: id_a }],
            &schema,
        );
        assert_eq!(names, vec!["id".to_string(), "tenant_id".to_string()]);
    }

    #[test]
    fn test_resolve_skips_unknown_refs() {
        let (schema, id_a, _) = schema_with_compound_pk();
        let names = resolve_partition_key(
            &[
                RawKeyRef {
                    key_id: ColumnId::new_v4(),
                },
                RawKeyRef { key_id: id_a },
            ],
            &schema,
        );
        assert_eq!(names, vec!["tenant_id".to_string()]);
    }

    #[test]
    fn test_table_key_constraints() {
        let (schema, _, _) = schema_with_compound_pk();
        let constraints = table_key_constraints(&schema);

        assert_eq!(constraints.len(), 1);
        assert_eq!(constraints[0].kind, KeyConstraintKind::PrimaryKey);
        assert_eq!(constraints[0].name.as_deref(), Some("pk_main"));
        assert_eq!(constraints[0].columns.len(), 2);
        assert!(!constraints[0].columns[1].is_activated);
    }

    #[test]
    fn test_empty_compound_spec_is_dropped() {
        let schema = RawTableSchema {
            unique_key: vec![RawUniqueKeySpec::default()],
            ..RawTableSchema::default()
        };
        assert!(table_key_constraints(&schema).is_empty());
    }

    #[test]
    fn test_inline_detection_excludes_compound_members() {
        let (schema, _, _) = schema_with_compound_pk();
        // Both properties are members of the compound key
        assert!(!is_inline_primary_key(&schema.properties[0], &schema));

        let standalone = RawColumnSchema {
            id: Some(ColumnId::new_v4()),
            name: "email".to_string(),
            primary_key: false,
            unique: true,
            ..RawColumnSchema::default()
        };
        assert!(is_inline_unique(&standalone, &schema));
    }
}
