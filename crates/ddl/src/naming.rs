//! Identifier quoting, schema qualification, and list rendering
//!
//! All identifiers are double-quoted throughout the emitted DDL.

use ddlsmith_schema::{FunctionArgument, KeyColumn};

use crate::activation::check_all_keys_deactivated;

// ============================================================================
// Identifiers
// ============================================================================

/// Double-quote an identifier
pub fn wrap_in_quotes(name: &str) -> String {
    format!("\"{name}\"")
}

/// Schema-qualified, quoted name; plain quoted name when the schema is
/// empty (a missing identifier renders as an empty field, never aborts)
pub fn name_prefixed_with_schema(name: &str, schema: &str) -> String {
    if schema.is_empty() {
        wrap_in_quotes(name)
    } else {
        format!("{}.{}", wrap_in_quotes(schema), wrap_in_quotes(name))
    }
}

// ============================================================================
// Column lists
// ============================================================================

/// Parenthesized, comma-joined, quoted column list with a leading space.
///
/// When the parent is active and only some member columns are, the
/// active columns render live and the inactive tail is folded into an
/// in-line comment so the projection stays valid:
/// ` ("a", "b" /* , "c" */)`. When everything is inactive (the whole
/// constraint will be commented) or the parent itself is inactive, the
/// full list renders plainly.
pub fn columns_list(columns: &[KeyColumn], all_deactivated: bool, parent_activated: bool) -> String {
    let quoted = |column: &KeyColumn| wrap_in_quotes(column.name.trim());

    if all_deactivated || !parent_activated {
        let names: Vec<String> = columns.iter().map(quoted).collect();
        return format!(" ({})", names.join(", "));
    }

    let activated: Vec<String> = columns
        .iter()
        .filter(|column| column.is_activated)
        .map(quoted)
        .collect();
    let deactivated: Vec<String> = columns
        .iter()
        .filter(|column| !column.is_activated)
        .map(quoted)
        .collect();

    if deactivated.is_empty() {
        format!(" ({})", activated.join(", "))
    } else {
        format!(" ({} /* , {} */)", activated.join(", "), deactivated.join(", "))
    }
}

/// Quoted, comma-joined list of only the active columns
pub fn active_columns_list(columns: &[KeyColumn]) -> String {
    let names: Vec<String> = columns
        .iter()
        .filter(|column| column.is_activated)
        .map(|column| wrap_in_quotes(column.name.trim()))
        .collect();
    names.join(", ")
}

/// Quoted, comma-joined full column list; the inactive tail is folded
/// into an in-line comment
pub fn full_columns_list(columns: &[KeyColumn]) -> String {
    if check_all_keys_deactivated(columns) {
        let names: Vec<String> = columns
            .iter()
            .map(|column| wrap_in_quotes(column.name.trim()))
            .collect();
        return names.join(", ");
    }

    let deactivated: Vec<String> = columns
        .iter()
        .filter(|column| !column.is_activated)
        .map(|column| wrap_in_quotes(column.name.trim()))
        .collect();

    let active = active_columns_list(columns);
    if deactivated.is_empty() {
        active
    } else {
        format!("{} /* , {} */", active, deactivated.join(", "))
    }
}

// ============================================================================
// Routine arguments
// ============================================================================

/// Comma-joined `mode name type DEFAULT expression` argument list, with
/// absent parts omitted
pub fn function_arguments(arguments: &[FunctionArgument]) -> String {
    let rendered: Vec<String> = arguments
        .iter()
        .map(|argument| {
            let mut parts: Vec<String> = Vec::with_capacity(4);
            if let Some(mode) = &argument.mode {
                parts.push(mode.clone());
            }
            if let Some(name) = &argument.name {
                parts.push(name.clone());
            }
            parts.push(argument.arg_type.clone());
            if let Some(default) = &argument.default_expression {
                parts.push(format!("DEFAULT {default}"));
            }
            parts.join(" ")
        })
        .collect();

    rendered.join(", ")
}

// ============================================================================
// Tests
// ============================================================================
