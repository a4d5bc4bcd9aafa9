//! Hydration: mapping raw authoring shapes into the normalized model
//!
//! Pure data reshaping, no SQL text. Each function reproduces the
//! field-by-field contract of the authoring layer's export format.
//! Absent fields stay absent (fail closed); the builders treat them as
//! "omit this clause". Type-class gating happens here: a collation rule
//! is only carried for character types, time precision and the timezone
//! flag only for time/timestamp, interval options only for `interval`.

use crate::column::ColumnDefinition;
use crate::constraint::{CheckConstraint, ForeignKeyDescriptor, KeyColumn};
use crate::database::{DatabaseSpec, FunctionSpec, ProcedureSpec};
use crate::keys;
use crate::raw::{
    RawCheckConstraint, RawColumnDefinition, RawColumnSchema, RawContainer, RawEntityDetails,
    RawForeignKey, RawTable, RawTableSchema, RawUdt,
};
use crate::table::{Partitioning, TableOptions, TableSpec};
use crate::udt::UserDefinedType;

const CHARACTER_TYPES: &[&str] = &["char", "varchar", "text"];
const TIME_TYPES: &[&str] = &["time", "timestamp"];

// ============================================================================
// Columns
// ============================================================================

/// Hydrate one column from its definition and authoring metadata.
///
/// `table_schema` supplies the compound-key context used to decide
/// whether the column's key flags render inline.
pub fn hydrate_column(
    column_definition: &RawColumnDefinition,
    json_schema: &RawColumnSchema,
    table_schema: &RawTableSchema,
) -> ColumnDefinition {
    let sql_type = column_definition.sql_type.as_str();

    let collation_rule = if CHARACTER_TYPES.contains(&sql_type) {
        json_schema.collation_rule.clone()
    } else {
        None
    };
    let (time_precision, with_timezone) = if TIME_TYPES.contains(&sql_type) {
        (json_schema.time_precision, json_schema.with_timezone)
    } else {
        (None, false)
    };
    let interval_options = if sql_type == "interval" {
        json_schema.interval_options.clone()
    } else {
        None
    };

    ColumnDefinition {
        name: column_definition.name.clone(),
        sql_type: column_definition.sql_type.clone(),
        nullable: column_definition.nullable,
        primary_key: keys::is_inline_primary_key(json_schema, table_schema),
        unique: keys::is_inline_unique(json_schema, table_schema),
        default: column_definition.default.clone(),
        length: column_definition.length,
        precision: column_definition.precision,
        scale: column_definition.scale,
        time_precision,
        with_timezone,
        collation_rule,
        is_activated: column_definition.is_activated,
        comment: json_schema.description.clone(),
        enum_values: json_schema.enum_values.clone(),
        range_subtype: json_schema.range_subtype.clone(),
        interval_options,
    }
}

// ============================================================================
// Tables
// ============================================================================

/// Hydrate a full table spec from its three raw facets.
pub fn hydrate_table(
    table_data: &RawTable,
    entity_data: &RawEntityDetails,
    json_schema: &RawTableSchema,
) -> TableSpec {
    let columns = table_data
        .columns
        .iter()
        .map(|definition| {
            let fallback = RawColumnSchema::default();
            let column_schema = json_schema
                .properties
                .iter()
                .find(|property| property.name == definition.name)
                .unwrap_or(&fallback);
            hydrate_column(definition, column_schema, json_schema)
        })
        .collect();

    let inherits = entity_data.inherits.as_ref().and_then(|key| {
        let related = table_data.related_schemas.get(key)?;
        related.code.clone().or_else(|| related.collection_name.clone())
    });

    let partitioning = entity_data.partitioning.first().and_then(|raw| {
        let method = raw.partition_method.clone()?;
        Some(Partitioning {
            method,
            composite_partition_key: keys::resolve_partition_key(
                &raw.composite_partition_key,
                json_schema,
            ),
        })
    });

    let select_statement = {
        let trimmed = entity_data.select_statement.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    };

    TableSpec {
        name: table_data.name.clone(),
        columns,
        key_constraints: keys::table_key_constraints(json_schema),
        check_constraints: table_data
            .check_constraints
            .iter()
            .map(hydrate_check_constraint)
            .collect(),
        foreign_key_constraints: table_data
            .foreign_keys
            .iter()
            .map(hydrate_foreign_key)
            .collect(),
        description: entity_data.description.clone(),
        if_not_exist: entity_data.if_not_exist,
        temporary: entity_data.temporary,
        unlogged: entity_data.unlogged,
        options: TableOptions {
            inherits,
            partitioning,
            using_method: entity_data.using_method.clone(),
            on_commit: entity_data.on_commit.clone(),
            storage_parameters: entity_data.storage_parameter.clone(),
            tablespace: entity_data.table_tablespace_name.clone(),
            select_statement,
        },
    }
}

// ============================================================================
// Constraints
// ============================================================================

/// Hydrate a check constraint (field renames only)
pub fn hydrate_check_constraint(raw: &RawCheckConstraint) -> CheckConstraint {
    CheckConstraint {
        name: raw.chk_constr_name.clone(),
        expression: raw.constr_expression.clone(),
        no_inherit: raw.no_inherit,
    }
}

/// Hydrate a foreign-key descriptor
pub fn hydrate_foreign_key(raw: &RawForeignKey) -> ForeignKeyDescriptor {
    let to_columns = |columns: &[crate::raw::RawKeyColumn]| {
        columns
            .iter()
            .map(|column| KeyColumn {
                name: column.name.clone(),
                is_activated: column.is_activated,
            })
            .collect()
    };

    ForeignKeyDescriptor {
        name: raw.name.clone(),
        foreign_table: raw.foreign_table.clone(),
        foreign_columns: to_columns(&raw.foreign_key),
        primary_table: raw.primary_table.clone(),
        primary_columns: to_columns(&raw.primary_key),
        primary_table_activated: raw.primary_table_activated,
        foreign_table_activated: raw.foreign_table_activated,
        primary_schema_name: raw.primary_schema_name.clone(),
        foreign_schema_name: raw.foreign_schema_name.clone(),
    }
}

// ============================================================================
// Database and UDTs
// ============================================================================

/// Hydrate the schema-level spec
pub fn hydrate_database(
    container: &RawContainer,
    udfs: Vec<FunctionSpec>,
    procedures: Vec<ProcedureSpec>,
) -> DatabaseSpec {
    DatabaseSpec {
        database_name: container.name.clone(),
        if_not_exist: container.if_not_exist,
        comments: container.description.clone(),
        udfs,
        procedures,
    }
}

/// Hydrate a user-defined type.
///
/// The raw `type` discriminates the body: `enum` and `range` carry their
/// own payloads, everything else is treated as a composite whose
/// attributes go through the column hydration.
pub fn hydrate_udt(raw: &RawUdt, database_name: &str) -> UserDefinedType {
    match raw.udt_type.as_str() {
        "enum" => UserDefinedType::enumeration(&raw.name, database_name, raw.enum_values.clone()),
        "range" => UserDefinedType::range(
            &raw.name,
            database_name,
            raw.range_subtype.clone().unwrap_or_default(),
        ),
        _ => {
            let empty_schema = RawTableSchema::default();
            let properties = raw
                .properties
                .iter()
                .map(|definition| {
                    hydrate_column(definition, &RawColumnSchema::default(), &empty_schema)
                })
                .collect();
            UserDefinedType::composite(&raw.name, database_name, properties)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn varchar_column() -> RawColumnDefinition {
        RawColumnDefinition {
            name: "title".to_string(),
            sql_type: "varchar".to_string(),
            length: Some(120),
            ..RawColumnDefinition::default()
        }
    }

    #[test]
    fn test_hydrate_column_character_keeps_collation() {
        let json_schema = RawColumnSchema {
            name: "title".to_string(),
            collation_rule: Some("de_DE".to_string()),
            time_precision: Some(3),
            ..RawColumnSchema::default()
        };
        let column = hydrate_column(&varchar_column(), &json_schema, &RawTableSchema::default());

        assert_eq!(column.collation_rule.as_deref(), Some("de_DE"));
        // Time attributes are gated off for non-temporal types
        assert_eq!(column.time_precision, None);
        assert!(!column.with_timezone);
    }

    #[test]
    fn test_hydrate_column_temporal_keeps_time_attributes() {
        let definition = RawColumnDefinition {
            name: "created".to_string(),
            sql_type: "timestamp".to_string(),
            ..RawColumnDefinition::default()
        };
        let json_schema = RawColumnSchema {
            name: "created".to_string(),
            time_precision: Some(6),
            with_timezone: true,
            collation_rule: Some("de_DE".to_string()),
            ..RawColumnSchema::default()
        };
        let column = hydrate_column(&definition, &json_schema, &RawTableSchema::default());

        assert_eq!(column.time_precision, Some(6));
        assert!(column.with_timezone);
        assert_eq!(column.collation_rule, None);
    }

    #[test]
    fn test_hydrate_check_constraint_field_mapping() {
        let raw = RawCheckConstraint {
            chk_constr_name: Some("positive_price".to_string()),
            constr_expression: "(price > 0)".to_string(),
            no_inherit: true,
        };
        let constraint = hydrate_check_constraint(&raw);

        assert_eq!(constraint.name.as_deref(), Some("positive_price"));
        assert_eq!(constraint.expression, "(price > 0)");
        assert!(constraint.no_inherit);
    }

    #[test]
    fn test_hydrate_table_resolves_inherits_and_select() {
        use crate::raw::{RawRelatedSchema, RawTable};

        let mut table_data = RawTable {
            name: "events".to_string(),
            ..RawTable::default()
        };
        table_data.related_schemas.insert(
            "0".to_string(),
            RawRelatedSchema {
                code: None,
                collection_name: Some("base_events".to_string()),
            },
        );

        let entity_data = RawEntityDetails {
            inherits: Some("0".to_string()),
            select_statement: "  SELECT * FROM staging.events  ".to_string(),
            ..RawEntityDetails::default()
        };

        let table = hydrate_table(&table_data, &entity_data, &RawTableSchema::default());
        assert_eq!(table.options.inherits.as_deref(), Some("base_events"));
        assert_eq!(
            table.options.select_statement.as_deref(),
            Some("SELECT * FROM staging.events")
        );
    }

    #[test]
    fn test_hydrate_udt_enum() {
        let raw = RawUdt {
            name: "mood".to_string(),
            udt_type: "enum".to_string(),
            enum_values: vec!["sad".to_string(), "happy".to_string()],
            ..RawUdt::default()
        };
        let udt = hydrate_udt(&raw, "public");
        assert!(matches!(udt.kind, crate::udt::UdtKind::Enum { .. }));
    }
}
