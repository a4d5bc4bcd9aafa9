//! `CREATE TYPE` rendering for user-defined types
//!
//! Composite attribute lines arrive pre-rendered from the column
//! converter, so the attribute list and the table column list share one
//! code path.

use ddlsmith_schema::{UdtKind, UserDefinedType};

use crate::naming::name_prefixed_with_schema;

/// Render one `CREATE TYPE` statement.
///
/// `rendered_attributes` carries the composite attribute lines (already
/// decorated and activation-commented); it is ignored for enum and
/// range types.
pub fn create_user_defined_type(udt: &UserDefinedType, rendered_attributes: &[String]) -> String {
    let qualified = name_prefixed_with_schema(&udt.name, &udt.database_name);

    match &udt.kind {
        UdtKind::Composite => {
            if rendered_attributes.is_empty() {
                tracing::warn!(name = %udt.name, "composite type has no attributes");
            }
            format!(
                "CREATE TYPE {qualified} AS (\n\t{}\n);",
                rendered_attributes.join(",\n\t")
            )
        }
        UdtKind::Enum { values } => {
            let labels: Vec<String> = values
                .iter()
                .map(|value| format!("'{}'", value.replace('\'', "''")))
                .collect();
            format!("CREATE TYPE {qualified} AS ENUM ({});", labels.join(", "))
        }
        UdtKind::Range { subtype } => {
            format!("CREATE TYPE {qualified} AS RANGE (\n\tSUBTYPE = {subtype}\n);")
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
